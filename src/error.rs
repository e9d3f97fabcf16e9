/// User-facing failure kinds of a token request attempt
use crate::identity::IdentityError;
use crate::token::TokenError;
use thiserror::Error;

/// Everything that can end an attempt. Each renders as the single error message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopupError {
    #[error("Please enter a Quote ID")]
    Validation,
    #[error("Could not retrieve your email address")]
    IdentityUnavailable,
    #[error("{0}")]
    RemoteRejected(String),
    #[error("{0}")]
    Transport(String),
}

impl From<IdentityError> for PopupError {
    fn from(_: IdentityError) -> Self {
        PopupError::IdentityUnavailable
    }
}

impl From<TokenError> for PopupError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::RemoteRejected(message) => PopupError::RemoteRejected(message),
            TokenError::Transport(message) => PopupError::Transport(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_causes_collapse() {
        let causes = vec![
            IdentityError::Declined("user closed the window".to_string()),
            IdentityError::Transport("Failed to fetch".to_string()),
            IdentityError::Malformed("missing email field".to_string()),
        ];

        for cause in causes {
            assert_eq!(PopupError::from(cause), PopupError::IdentityUnavailable);
        }
    }

    #[test]
    fn test_remote_message_is_shown_verbatim() {
        let error = PopupError::from(TokenError::RemoteRejected("Quote not found".to_string()));
        assert_eq!(error.to_string(), "Quote not found");
    }
}
