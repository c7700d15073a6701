//! Error types for form submission.

use thiserror::Error;

/// The only message ever shown to the user, whatever went wrong.
pub const USER_ERROR_MESSAGE: &str = "Invalid JSON input or file upload error. Please try again.";

/// Errors that can occur while preparing or sending a submission.
///
/// `Display` carries the underlying cause for logs; the form surfaces
/// [`FormError::user_message`] instead.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned status {status}")]
    Status { status: u16 },

    #[error("could not decode response body: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormError {
    /// The fixed user-facing message. Failure causes are not distinguished.
    pub fn user_message(&self) -> &'static str {
        USER_ERROR_MESSAGE
    }

    /// Whether the failure happened before any request was sent.
    pub fn is_input_error(&self) -> bool {
        matches!(self, FormError::InvalidJson(_) | FormError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_errors_share_user_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let errors = [
            FormError::InvalidJson(json_err),
            FormError::Transport("connection refused".into()),
            FormError::Status { status: 500 },
            FormError::Decode("expected object".into()),
        ];
        for e in &errors {
            assert_eq!(e.user_message(), USER_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_display_keeps_cause() {
        let e = FormError::Status { status: 404 };
        assert_eq!(e.to_string(), "server returned status 404");
        assert!(!e.is_input_error());
    }

    #[test]
    fn test_invalid_json_is_input_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(FormError::from(json_err).is_input_error());
    }
}
