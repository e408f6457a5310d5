//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub use cli::{CliArgs, Command, GlobalOverrides, ListArgs, PostArgs, ThemeArgs, ThemeCommand};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "folio";
const DEFAULT_OWNER_NAME: &str = "Gyan Prakash Tiwari";
const DEFAULT_HOME_PATH: &str = "index.html";
const DEFAULT_LISTING_PATH: &str = "blog.html";
const DEFAULT_POST_PATH: &str = "post.html";
const DEFAULT_PREFERENCES_FILE: &str = ".folio/preferences.json";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub site: SiteSettings,
    pub content: ContentSettings,
    pub theme: ThemeSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub owner_name: String,
    pub home_path: String,
    pub listing_path: String,
    pub post_path: String,
    pub footer_copy: String,
}

#[derive(Debug, Clone)]
pub struct ContentSettings {
    /// When unset the built-in posts are used.
    pub posts_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ThemeSettings {
    pub preferences_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("FOLIO").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);
    Settings::from_raw(raw)
}

pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    site: RawSiteSettings,
    content: RawContentSettings,
    theme: RawThemeSettings,
    logging: RawLoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    owner_name: Option<String>,
    home_path: Option<String>,
    listing_path: Option<String>,
    post_path: Option<String>,
    footer_copy: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawContentSettings {
    posts_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawThemeSettings {
    preferences_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &GlobalOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(path) = overrides.posts_file.as_ref() {
            self.content.posts_file = Some(path.clone());
        }
        if let Some(path) = overrides.theme_file.as_ref() {
            self.theme.preferences_file = Some(path.clone());
        }
        if let Some(name) = overrides.owner_name.as_ref() {
            self.site.owner_name = Some(name.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            site,
            content,
            theme,
            logging,
        } = raw;

        Ok(Self {
            site: build_site_settings(site)?,
            content: build_content_settings(content),
            theme: build_theme_settings(theme)?,
            logging: build_logging_settings(logging)?,
        })
    }
}

fn build_site_settings(site: RawSiteSettings) -> Result<SiteSettings, LoadError> {
    let owner_name = non_blank(site.owner_name).unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string());
    if owner_name.contains('\n') {
        return Err(LoadError::invalid("site.owner_name", "must be a single line"));
    }

    let home_path = non_blank(site.home_path).unwrap_or_else(|| DEFAULT_HOME_PATH.to_string());
    let listing_path = page_path("site.listing_path", site.listing_path, DEFAULT_LISTING_PATH)?;
    let post_path = page_path("site.post_path", site.post_path, DEFAULT_POST_PATH)?;
    let footer_copy = non_blank(site.footer_copy).unwrap_or_else(|| format!("© {owner_name}"));

    Ok(SiteSettings {
        owner_name,
        home_path,
        listing_path,
        post_path,
        footer_copy,
    })
}

fn build_content_settings(content: RawContentSettings) -> ContentSettings {
    ContentSettings {
        posts_file: content
            .posts_file
            .filter(|path| !path.as_os_str().is_empty()),
    }
}

fn build_theme_settings(theme: RawThemeSettings) -> Result<ThemeSettings, LoadError> {
    let preferences_file = theme
        .preferences_file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_FILE));

    if preferences_file.as_os_str().is_empty() {
        return Err(LoadError::invalid(
            "theme.preferences_file",
            "path must not be empty",
        ));
    }

    Ok(ThemeSettings { preferences_file })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// Page paths are used verbatim as href prefixes, so a query or fragment
/// would corrupt every generated link.
fn page_path(
    key: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<String, LoadError> {
    let path = non_blank(value).unwrap_or_else(|| default.to_string());
    if path.contains(['?', '#']) {
        return Err(LoadError::invalid(
            key,
            format!("`{path}` must not contain a query or fragment"),
        ));
    }
    Ok(path)
}

#[cfg(test)]
mod tests;
