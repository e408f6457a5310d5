use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::theme::{THEME_STORAGE_KEY, Theme};

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference storage error: {0}")]
    Persistence(String),
    #[error("preference file is corrupt: {message}")]
    Corrupt { message: String },
}

impl PreferenceError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Single-level string key-value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

pub struct ThemeService<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme; absent or unrecognized values fall back to light.
    pub fn current(&self) -> Result<Theme, PreferenceError> {
        let Some(stored) = self.store.get(THEME_STORAGE_KEY)? else {
            return Ok(Theme::default());
        };

        match stored.parse::<Theme>() {
            Ok(theme) => Ok(theme),
            Err(err) => {
                warn!(
                    target = "folio::theme",
                    value = %stored,
                    error = %err,
                    "ignoring unrecognized stored theme"
                );
                Ok(Theme::default())
            }
        }
    }

    pub fn set(&mut self, theme: Theme) -> Result<Theme, PreferenceError> {
        self.store.set(THEME_STORAGE_KEY, theme.as_str())?;
        debug!(target = "folio::theme", theme = %theme, "theme stored");
        Ok(theme)
    }

    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.current()?.toggled();
        self.set(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
