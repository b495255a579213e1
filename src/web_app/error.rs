// web_app/error.rs - Error types shared by the flows and the HTTP client
//
// ApiError covers everything that can go wrong once a request leaves the
// browser. FormError covers checks that stop a submission before that.

use thiserror::Error;

/// Failure while talking to the backend API
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    /// Non-2xx response; `message` is the `error` field of the body, if any
    #[error("Request failed ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Http { status: u16, message: Option<String> },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Message the server put in its error body
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Server message when present, otherwise the caller's generic fallback
    ///
    /// Transport, timeout and parse failures always yield the fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Local validation failure; no request is issued when one of these occurs
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Http {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_user_message_falls_back() {
        let cases = [
            ApiError::Http { status: 500, message: None },
            ApiError::Http { status: 500, message: Some(String::new()) },
            ApiError::Network("connection refused".to_string()),
            ApiError::Timeout("Request timed out.".to_string()),
            ApiError::Parse("expected value".to_string()),
        ];

        for err in cases {
            assert_eq!(err.user_message("Login failed"), "Login failed", "{:?}", err);
        }
    }

    #[test]
    fn test_display() {
        let err = ApiError::Http { status: 409, message: Some("Username taken".to_string()) };
        assert_eq!(err.to_string(), "Request failed (409): Username taken");

        let err = ApiError::Http { status: 502, message: None };
        assert_eq!(err.to_string(), "Request failed (502): no details");

        assert_eq!(FormError::PasswordMismatch.to_string(), "Passwords do not match");
    }
}
