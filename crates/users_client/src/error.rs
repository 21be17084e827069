use thiserror::Error;

/// Failures talking to the users API.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Request timed out. Please try again.")]
    Timeout,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status for `Http` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Client-side form validation failures; these never reach the network.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill out all fields.")]
    MissingFields,
    #[error("A user id is required for this action.")]
    MissingId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_server_message_verbatim() {
        let err = ApiError::Http {
            status: 409,
            message: "Email already taken".to_string(),
        };
        assert_eq!(err.to_string(), "Email already taken");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn non_http_errors_have_no_status() {
        assert_eq!(ApiError::Timeout.status(), None);
        assert_eq!(ApiError::Network("refused".to_string()).status(), None);
    }
}
