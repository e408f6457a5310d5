//! Post slugs: the sole lookup key of the post store and the value of the
//! `post=` query parameter.
//!
//! A slug is accepted only when it is already in the form `slug::slugify`
//! would produce, so lookups never depend on case or punctuation variants.

use std::fmt;

use slug::slugify;
use thiserror::Error;

/// Errors that can occur while validating a slug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("slug `{input}` is not normalized (expected `{expected}`)")]
    NotNormalized { input: String, expected: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, SlugError> {
        let raw = value.into();
        let expected = derive_slug(&raw)?;
        if expected != raw {
            return Err(SlugError::NotNormalized {
                input: raw,
                expected,
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Derive a slug from human-readable text.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(input);
    if candidate.is_empty() {
        return Err(SlugError::EmptyInput);
    }

    Ok(candidate)
}
