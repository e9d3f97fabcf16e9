/// Popup configuration
use crate::token::TokenKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://efconsulting.com.au";
pub const DEFAULT_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid {field} '{value}': {source}")]
    Url {
        field: &'static str,
        value: String,
        source: url::ParseError,
    },
}

/// Settings the popup controller is constructed with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub api_base_url: String,
    pub userinfo_url: String,
    /// Resolve the signed-in user's email before requesting a token
    pub require_email: bool,
}

impl PopupConfig {
    /// Parse a partial JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<PopupConfig, ConfigError> {
        let config: PopupConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_url("api_base_url", &self.api_base_url)?;
        parse_url("userinfo_url", &self.userinfo_url)?;
        Ok(())
    }

    /// Absolute endpoint URL for a token request variant
    pub fn token_endpoint(&self, kind: TokenKind) -> Result<Url, ConfigError> {
        // Url::join replaces the last path segment unless the base ends in '/'
        let base = if self.api_base_url.ends_with('/') {
            self.api_base_url.clone()
        } else {
            format!("{}/", self.api_base_url)
        };
        let base = parse_url("api_base_url", &base)?;
        base.join(kind.path()).map_err(|source| ConfigError::Url {
            field: "api_base_url",
            value: self.api_base_url.clone(),
            source,
        })
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        PopupConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            userinfo_url: DEFAULT_USERINFO_URL.to_string(),
            require_email: true,
        }
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::Url {
        field,
        value: value.to_string(),
        source,
    })
}
