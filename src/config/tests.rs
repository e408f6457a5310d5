use std::path::{Path, PathBuf};

use serial_test::serial;

use super::*;

/// Sets an environment variable for the lifetime of the guard.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        // SAFETY: every test touching the process environment runs `#[serial]`.
        unsafe { std::env::set_var(key, value) };
        Self(key)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see `EnvGuard::set`.
        unsafe { std::env::remove_var(self.0) };
    }
}

fn owner_config(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("site.toml");
    std::fs::write(&path, "[site]\nowner_name = \"File Owner\"\n").expect("write config");
    path
}

#[test]
fn defaults_cover_every_section() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.site.owner_name, "Gyan Prakash Tiwari");
    assert_eq!(settings.site.listing_path, "blog.html");
    assert_eq!(settings.site.post_path, "post.html");
    assert_eq!(settings.site.footer_copy, "© Gyan Prakash Tiwari");
    assert!(settings.content.posts_file.is_none());
    assert_eq!(
        settings.theme.preferences_file,
        Path::new(".folio/preferences.json")
    );
    assert_eq!(settings.logging.level, LevelFilter::WARN);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.site.owner_name = Some("From File".to_string());
    raw.logging.level = Some("info".to_string());

    let overrides = GlobalOverrides {
        owner_name: Some("From Cli".to_string()),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.site.owner_name, "From Cli");
    assert_eq!(settings.site.footer_copy, "© From Cli");
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = GlobalOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn rejects_invalid_values() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("loud".to_string());
    assert!(matches!(
        Settings::from_raw(raw),
        Err(LoadError::Invalid {
            key: "logging.level",
            ..
        })
    ));

    let mut raw = RawSettings::default();
    raw.site.listing_path = Some("blog.html?tag=x".to_string());
    assert!(matches!(
        Settings::from_raw(raw),
        Err(LoadError::Invalid {
            key: "site.listing_path",
            ..
        })
    ));
}

#[test]
#[serial]
fn config_file_is_layered_under_cli() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("site.toml");
    std::fs::write(
        &path,
        "[site]\nowner_name = \"File Owner\"\npost_path = \"article.html\"\n\n[theme]\npreferences_file = \"prefs.json\"\n",
    )
    .expect("write config");

    let args = CliArgs::parse_from([
        "folio",
        "--config-file",
        path.to_str().expect("utf8 path"),
        "--theme-file",
        "/tmp/other.json",
        "tags",
    ]);
    let settings = load(&args).expect("load settings");

    assert_eq!(settings.site.owner_name, "File Owner");
    assert_eq!(settings.site.post_path, "article.html");
    assert_eq!(
        settings.theme.preferences_file,
        Path::new("/tmp/other.json")
    );
}

#[test]
#[serial]
fn environment_overrides_file_and_yields_to_cli() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = owner_config(&dir);
    let config_file = path.to_str().expect("utf8 path");
    let _env = EnvGuard::set("FOLIO__SITE__OWNER_NAME", "Env Owner");

    let args = CliArgs::parse_from(["folio", "--config-file", config_file, "tags"]);
    let settings = load(&args).expect("load settings");
    assert_eq!(settings.site.owner_name, "Env Owner");
    assert_eq!(settings.site.footer_copy, "© Env Owner");

    let args = CliArgs::parse_from([
        "folio",
        "--config-file",
        config_file,
        "--owner-name",
        "Cli Owner",
        "tags",
    ]);
    let settings = load(&args).expect("load settings");
    assert_eq!(settings.site.owner_name, "Cli Owner");
}

#[test]
fn default_command_is_absent() {
    let args = CliArgs::parse_from(["folio"]);
    assert!(args.command.is_none());
}

#[test]
fn parse_list_arguments() {
    let args = CliArgs::parse_from(["folio", "list", "--tag", "WebRTC"]);

    match args.command.expect("list command") {
        Command::List(list) => assert_eq!(list.tag.as_deref(), Some("WebRTC")),
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_post_arguments_with_global_override() {
    let args = CliArgs::parse_from([
        "folio",
        "post",
        "post=understanding-webrtc",
        "--posts-file",
        "/tmp/posts.toml",
    ]);

    assert_eq!(
        args.overrides.posts_file.as_deref(),
        Some(Path::new("/tmp/posts.toml"))
    );
    match args.command.expect("post command") {
        Command::Post(post) => assert_eq!(post.query, "post=understanding-webrtc"),
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_theme_arguments() {
    let args = CliArgs::parse_from(["folio", "theme", "set", "dark"]);

    match args.command.expect("theme command") {
        Command::Theme(ThemeArgs {
            command: Some(ThemeCommand::Set { theme }),
        }) => assert_eq!(theme, crate::domain::theme::Theme::Dark),
        _ => panic!("wrong command parsed"),
    }

    assert!(CliArgs::try_parse_from(["folio", "theme", "set", "sepia"]).is_err());
}
