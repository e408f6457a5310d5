use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    application::theme::PreferenceError, infra::error::InfraError,
    presentation::views::TemplateRenderError,
};

/// Flattened error chain with the location that produced it.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self { source, messages }
    }

    pub fn joined(&self) -> String {
        self.messages.join(": ")
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Template(#[from] TemplateRenderError),
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Where the error originated, for log correlation.
    pub fn location(&self) -> &'static str {
        match self {
            AppError::Infra(_) => "infra",
            AppError::Template(err) => err.location(),
            AppError::Preference(_) => "application::theme",
            AppError::Unexpected(_) => "application",
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::from_error(self.location(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_walks_the_source_chain() {
        let io = std::io::Error::other("disk full");
        let error = AppError::from(InfraError::from(io));

        let report = error.report();
        assert_eq!(report.source, "infra");
        assert_eq!(report.messages.first().map(String::as_str), Some("io error: disk full"));
        assert!(report.joined().contains("disk full"));
    }
}
