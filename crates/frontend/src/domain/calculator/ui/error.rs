use thiserror::Error;

/// Shown for any transport failure; the cause only goes to the log.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Failed to connect to the backend. Please try again.";

/// Shown in place of the implicit result when the concepts fetch fails.
pub const CONCEPTS_ERROR_MESSAGE: &str = "Failed to fetch string results.";

/// Local input validation, checked before any request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField,

    #[error("Invalid operator. Use +, -, *, or /.")]
    InvalidOperator,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service answered with an `error` of its own
    #[error("{0}")]
    Remote(String),

    /// Unreachable host, unexpected status or unreadable body
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Text the user gets to see
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Remote(message) => message.clone(),
            ApiError::Transport(_) => TRANSPORT_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_cause_is_not_shown() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), TRANSPORT_ERROR_MESSAGE);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_remote_message_is_verbatim() {
        let err = ApiError::Remote("Cannot divide by zero".to_string());
        assert_eq!(err.user_message(), "Cannot divide by zero");
    }
}
