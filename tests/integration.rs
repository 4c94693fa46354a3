// SPDX-License-Identifier: MPL-2.0
use cam_lens::config::{self, Config, PanelConfig};
use cam_lens::i18n::datetime::TimestampFormatter;
use cam_lens::i18n::fluent::I18n;
use std::time::Duration;
use tempfile::tempdir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn test_cli_language_beats_config() {
    let mut cfg = Config::default();
    cfg.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &cfg);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_settings_file_feeds_panel_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        r#"
[api]
base_url = "https://cam.example.com/"
api_key = "public-key"

[access]
password = "orchid42"

[gallery]
status_timeout_secs = 6
columns = 4
"#,
    )
    .expect("Failed to write settings");

    let (cfg, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let panel = PanelConfig::resolve_with_env(&cfg, None, no_env);
    assert_eq!(panel.api_base_url(), "https://cam.example.com");
    assert_eq!(panel.api_key(), Some("public-key"));
    assert!(panel.access_secret().matches("orchid42"));
    assert_eq!(panel.status_timeout(), Duration::from_secs(6));
    assert_eq!(panel.grid_columns(), 4);
}

#[test]
fn test_corrupt_settings_fall_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[api\nbase_url = ")
        .expect("Failed to write settings");

    let (cfg, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(cfg, Config::default());
    assert_eq!(warning.as_deref(), Some("warning-config-load-error"));

    let i18n = I18n::new(Some("en-US".to_string()), &cfg);
    assert!(!i18n.tr("warning-config-load-error").starts_with("MISSING:"));
}

#[test]
fn test_timestamps_follow_active_locale() {
    let english = I18n::new(Some("en-US".to_string()), &Config::default());
    let french = I18n::new(Some("fr".to_string()), &Config::default());

    let instant = "2024-01-02T10:00:00Z";
    let en = TimestampFormatter::from_i18n(&english).format_in(instant, &chrono::Utc);
    assert_eq!(en.date, "Jan 2, 2024");
    assert_eq!(en.time, "10:00 AM");

    let fr = TimestampFormatter::from_i18n(&french).format_in(instant, &chrono::Utc);
    assert_ne!(fr.date, en.date);
    assert_eq!(fr.time, "10:00");
}

#[test]
fn test_every_locale_has_the_gallery_strings() {
    let keys = [
        "gate-error-incorrect",
        "gallery-empty-title",
        "status-capture-sent",
        "status-capture-failed",
        "timestamp-date-pattern",
    ];
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for key in keys {
            assert!(
                !i18n.tr(key).starts_with("MISSING:"),
                "{lang} is missing {key}"
            );
        }
    }
}
