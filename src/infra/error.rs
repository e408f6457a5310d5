use thiserror::Error;

use crate::domain::error::DomainError;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("content file `{path}` is invalid: {message}")]
    Content { path: String, message: String },
    #[error("content file `{path}` holds an invalid post")]
    InvalidPost {
        path: String,
        #[source]
        error: DomainError,
    },
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

impl InfraError {
    pub fn content(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Content {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_post(path: impl Into<String>, error: DomainError) -> Self {
        Self::InvalidPost {
            path: path.into(),
            error,
        }
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}
