/// Token URL requests against the remote API
use crate::config::PopupConfig;
use crate::http::{HttpClient, HttpRequest, Method};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which token the remote API should mint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Standard,
    FullForm,
}

impl TokenKind {
    /// Endpoint path relative to the API base
    pub fn path(self) -> &'static str {
        match self {
            TokenKind::Standard => "api/create-url",
            TokenKind::FullForm => "api/create-full-form",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Standard => "Generate Token",
            TokenKind::FullForm => "Generate Full Form",
        }
    }

    pub fn sibling(self) -> TokenKind {
        match self {
            TokenKind::Standard => TokenKind::FullForm,
            TokenKind::FullForm => TokenKind::Standard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRequest {
    pub scoro_quote_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    /// The API answered with a failure status and its own message
    #[error("{0}")]
    RemoteRejected(String),
    #[error("{0}")]
    Transport(String),
}

pub struct TokenClient<'a, C> {
    http: &'a C,
    config: &'a PopupConfig,
}

impl<'a, C: HttpClient> TokenClient<'a, C> {
    pub fn new(http: &'a C, config: &'a PopupConfig) -> Self {
        TokenClient { http, config }
    }

    /// PUT the quote id (and email, when known) and return the minted token URL
    ///
    /// A successful response without a `url` field yields an empty string.
    pub async fn request_token(
        &self,
        kind: TokenKind,
        quote_id: &str,
        email: Option<&str>,
    ) -> Result<String, TokenError> {
        let endpoint = self
            .config
            .token_endpoint(kind)
            .map_err(|e| TokenError::Transport(e.to_string()))?;

        let body = TokenRequest {
            scoro_quote_id: quote_id.to_string(),
            email: email.map(str::to_string),
        };
        let body = serde_json::to_string(&body)
            .map_err(|e| TokenError::Transport(format!("Failed to serialize request: {}", e)))?;

        let request = HttpRequest::new(Method::Put, endpoint.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json_body(body);

        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| TokenError::Transport(e.0))?;

        if !response.ok() {
            let failure: ErrorResponse = serde_json::from_str(&response.body)
                .map_err(|e| TokenError::Transport(format!("Invalid error response: {}", e)))?;
            let message = failure
                .error
                .unwrap_or_else(|| format!("Request failed with status {}", response.status));
            return Err(TokenError::RemoteRejected(message));
        }

        let parsed: TokenResponse = serde_json::from_str(&response.body)
            .map_err(|e| TokenError::Transport(format!("Invalid response: {}", e)))?;

        Ok(parsed.url.unwrap_or_default())
    }
}
