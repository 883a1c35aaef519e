//! API error types.

use kar_config::ConfigError;
use thiserror::Error;

/// Message every 401/403 response is reduced to.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Errors that can occur when talking to the back-office API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 401 or 403.
    #[error("Unauthorized")]
    Unauthorized {
        /// 401 or 403.
        status: u16,
    },

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Server-supplied message, or one derived from the status.
        message: String,
    },

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The client is not configured well enough to send requests.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A request body was refused before it reached the API.
    #[error(transparent)]
    Rejected(#[from] kar_core::CoreError),
}

impl ApiError {
    /// The single human-readable line shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => UNAUTHORIZED_MESSAGE.to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Http(err) if err.is_timeout() => "Request timed out".to_string(),
            Self::Http(err) if err.is_connect() => "Could not reach the server".to_string(),
            other => other.to_string(),
        }
    }

    /// HTTP status behind the error, when the API answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status } | Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unauthorized_reads_the_same_for_401_and_403() {
        for status in [401, 403] {
            let err = ApiError::Unauthorized { status };
            assert_eq!(err.user_message(), "Unauthorized");
            assert_eq!(err.to_string(), "Unauthorized");
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn api_error_user_message_is_bare_message() {
        let err = ApiError::Api {
            status: 422,
            message: "Vendor GSTIN already exists".into(),
        };
        assert_eq!(err.user_message(), "Vendor GSTIN already exists");
        assert_eq!(err.to_string(), "API error (422): Vendor GSTIN already exists");
    }

    #[test]
    fn parse_error_has_no_status() {
        assert_eq!(ApiError::Parse("bad".into()).status(), None);
    }
}
