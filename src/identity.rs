/// Signed-in user email lookup via the identity service and userinfo endpoint
use crate::host::PopupHost;
use crate::http::{HttpClient, HttpRequest, Method};
use serde::Deserialize;
use thiserror::Error;

/// Why the email could not be resolved. Callers show one message for all of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdentityError {
    #[error("no credential issued: {0}")]
    Declined(String),
    #[error("userinfo request failed: {0}")]
    Transport(String),
    #[error("userinfo response unusable: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    #[serde(default)]
    email: Option<String>,
}

pub struct IdentityResolver<'a, H, C> {
    host: &'a H,
    http: &'a C,
    userinfo_url: &'a str,
}

impl<'a, H: PopupHost, C: HttpClient> IdentityResolver<'a, H, C> {
    pub fn new(host: &'a H, http: &'a C, userinfo_url: &'a str) -> Self {
        IdentityResolver {
            host,
            http,
            userinfo_url,
        }
    }

    /// Ask for a credential (may prompt the user), then exchange it for the email
    pub async fn resolve_email(&self) -> Result<String, IdentityError> {
        let token = self
            .host
            .auth_token(true)
            .await
            .map_err(IdentityError::Declined)?;

        let request = HttpRequest::new(Method::Get, self.userinfo_url)
            .header("Authorization", &format!("Bearer {}", token))
            .header("Accept", "application/json");

        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| IdentityError::Transport(e.0))?;

        if !response.ok() {
            return Err(IdentityError::Transport(format!(
                "status {}",
                response.status
            )));
        }

        let info: UserInfo = serde_json::from_str(&response.body)
            .map_err(|e| IdentityError::Malformed(e.to_string()))?;

        info.email
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| IdentityError::Malformed("missing email field".to_string()))
    }
}
