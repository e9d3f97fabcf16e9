/// Quote Token - Chrome Extension popup for minting Scoro quote token URLs
/// Built with Rust + WASM + Yew

mod config;
mod controller;
mod error;
mod host;
mod http;
mod identity;
mod extractor;
mod token;
pub mod ui;

#[cfg(test)]
mod fakes;

pub use config::{ConfigError, PopupConfig};
pub use controller::{PopupController, PopupView, TriggerState};
pub use error::PopupError;
pub use host::{ActiveTab, ChromeHost, PopupHost};
pub use http::{FetchClient, HttpClient, HttpRequest, HttpResponse, Method, TransportError};
pub use identity::{IdentityError, IdentityResolver};
pub use token::{TokenClient, TokenError, TokenKind, TokenRequest};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export quote id extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_quote_id(url: &str) -> String {
    extractor::extract_quote_id(url).unwrap_or_default()
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Start the popup against a different API host or without email lookup
#[wasm_bindgen]
pub fn start_popup_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = PopupConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("Starting popup against {}", config.api_base_url);
    yew::Renderer::<ui::popup::App>::with_props(ui::popup::AppProps { config }).render();
    Ok(())
}
