use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

use crate::domain::theme::Theme;

/// Command-line arguments for the Folio binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio personal site renderer")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "FOLIO_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the blog listing page.
    List(ListArgs),
    /// Print a single post page.
    Post(PostArgs),
    /// Print every tag used by the posts, one per line.
    Tags,
    /// Inspect or change the stored theme.
    Theme(ThemeArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct ListArgs {
    /// Only list posts carrying this tag.
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct PostArgs {
    /// Query string of the post page, e.g. `post=understanding-webrtc`.
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,
}

#[derive(Debug, Args, Clone)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: Option<ThemeCommand>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum ThemeCommand {
    /// Print the stored theme.
    Show,
    /// Switch between light and dark and store the result.
    Toggle,
    /// Store an explicit theme.
    Set {
        #[arg(value_name = "THEME")]
        theme: Theme,
    },
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,

    /// Load posts from a TOML file instead of the built-in posts.
    #[arg(
        long = "posts-file",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub posts_file: Option<PathBuf>,

    /// Override the file holding the stored theme.
    #[arg(
        long = "theme-file",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub theme_file: Option<PathBuf>,

    /// Override the site owner's name used in titles.
    #[arg(long = "owner-name", value_name = "NAME", global = true)]
    pub owner_name: Option<String>,
}
