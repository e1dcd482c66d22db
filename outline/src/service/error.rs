//! Error types for the orchestration service.

/// Failure reported by an injected remote client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} failed: {message}")]
pub struct RemoteError {
    /// Remote operation name, e.g. `ListStacks`.
    pub operation: &'static str,
    pub message: String,
}

impl RemoteError {
    pub fn new<M: Into<String>>(operation: &'static str, message: M) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

/// Main service error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request body is not a JSON object of strings
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// No `action` key in the request body
    #[error("missing `action` in request body")]
    MissingAction,

    /// Action other than `status`, `create` or `delete`
    #[error("unsupported action `{0}`")]
    UnsupportedAction(String),

    /// `create` / `delete` without a `name`
    #[error("missing `name` for action `{0}`")]
    MissingName(&'static str),

    /// No published application carries the requested name
    #[error("application `{0}` not found")]
    ApplicationNotFound(String),

    /// Remote call failed
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl ServiceError {
    /// HTTP status code reported to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidBody(_)
            | Self::MissingAction
            | Self::UnsupportedAction(_)
            | Self::MissingName(_) => 400,
            Self::ApplicationNotFound(_) => 404,
            Self::Remote(_) => 500,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable `{0}` is not set")]
    MissingVar(&'static str),

    #[error("environment variable `{0}` is empty")]
    EmptyVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::{RemoteError, ServiceError};

    #[test]
    fn remote_error_names_the_operation() {
        let err = RemoteError::new("ListStacks", "throttled");
        assert_eq!(err.to_string(), "ListStacks failed: throttled");
        assert_eq!(ServiceError::from(err).to_string(), "ListStacks failed: throttled");
    }

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(ServiceError::MissingAction.status_code(), 400);
        assert_eq!(ServiceError::MissingName("create").status_code(), 400);
        assert_eq!(
            ServiceError::ApplicationNotFound("api".into()).status_code(),
            404
        );
        assert_eq!(
            ServiceError::Remote(RemoteError::new("CreateStack", "denied")).status_code(),
            500
        );
    }
}
