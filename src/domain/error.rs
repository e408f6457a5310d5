use thiserror::Error;

use super::slug::SlugError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("domain validation failed: {message}")]
    Validation { message: String },
    #[error("duplicate post slug `{slug}`")]
    DuplicateSlug { slug: String },
    #[error(transparent)]
    Slug(#[from] SlugError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn duplicate_slug(slug: impl Into<String>) -> Self {
        Self::DuplicateSlug { slug: slug.into() }
    }
}
