/// Quote identifier extraction from Scoro quote-view URLs
use regex::Regex;
use std::sync::LazyLock;

static QUOTE_VIEW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://elephantsfootconsulting\.scoro\.com/quotes/view/(\d+)")
        .expect("quote-view pattern is valid")
});

/// Extract the quote identifier from a quote-view URL
///
/// The match is unanchored, so query strings, fragments and trailing path
/// segments are ignored:
/// - https://elephantsfootconsulting.scoro.com/quotes/view/12345 → 12345
/// - https://elephantsfootconsulting.scoro.com/quotes/view/42/edit → 42
/// - https://example.com/quotes/view/12345 → None
pub fn extract_quote_id(url: &str) -> Option<String> {
    QUOTE_VIEW
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}
