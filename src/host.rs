/// Browser-side collaborators: tab query, identity service, clipboard
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getAuthToken(interactive: bool) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn writeClipboard(text: &str) -> Result<(), JsValue>;
}

/// The active tab of the current window, as reported by chrome.tabs.query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveTab {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[allow(async_fn_in_trait)]
pub trait PopupHost {
    async fn active_tab(&self) -> Option<ActiveTab>;

    /// Bearer credential from the identity service; Err carries the decline reason
    async fn auth_token(&self, interactive: bool) -> Result<String, String>;

    async fn write_clipboard(&self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeHost;

impl PopupHost for ChromeHost {
    async fn active_tab(&self) -> Option<ActiveTab> {
        let tab_js = match getActiveTab().await {
            Ok(tab_js) => tab_js,
            Err(e) => {
                log::warn!("Failed to query active tab: {}", js_error_message(&e));
                return None;
            }
        };

        if tab_js.is_null() || tab_js.is_undefined() {
            return None;
        }

        serde_wasm_bindgen::from_value(tab_js)
            .map_err(|e| log::warn!("Failed to parse active tab: {:?}", e))
            .ok()
    }

    async fn auth_token(&self, interactive: bool) -> Result<String, String> {
        let token = getAuthToken(interactive)
            .await
            .map_err(|e| js_error_message(&e))?;

        token
            .as_string()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| "no token issued".to_string())
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), String> {
        writeClipboard(text).await.map_err(|e| js_error_message(&e))
    }
}

/// Best-effort message from a rejected JS promise
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_deserialization() {
        let tab: ActiveTab = serde_json::from_str(
            r#"{"id": 4, "url": "https://elephantsfootconsulting.scoro.com/quotes/view/12", "title": "Quote", "pinned": false}"#,
        )
        .unwrap();

        assert_eq!(tab.id, Some(4));
        assert_eq!(tab.url.as_deref(), Some("https://elephantsfootconsulting.scoro.com/quotes/view/12"));
    }

    #[test]
    fn test_active_tab_without_url() {
        // Tabs lacking the "tabs" permission come back without url/title
        let tab: ActiveTab = serde_json::from_str(r#"{"id": 9}"#).unwrap();

        assert_eq!(tab.id, Some(9));
        assert!(tab.url.is_none());
        assert!(tab.title.is_none());
    }
}
