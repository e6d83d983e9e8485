//! Startup settings resolved from a config file on disk.

use std::fs;

use embedscope_engine::{App, AppSettings, Architecture, EmbedscopeConfig, Step, UiOptions};
use tempfile::tempdir;

fn load(contents: &str) -> EmbedscopeConfig {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    EmbedscopeConfig::load_from(&path)
        .expect("valid config")
        .expect("config present")
}

#[test]
fn config_model_and_ui_options_reach_the_app() {
    let config = load(
        r#"
[app]
model = "elmo"
ascii_only = true
reduced_motion = true
"#,
    );
    let settings = AppSettings::resolve(Some(&config));
    assert_eq!(settings.architecture, Architecture::Elmo);
    assert!(!settings.autoplay);
    assert_eq!(
        settings.ui_options,
        UiOptions {
            ascii_only: true,
            high_contrast: false,
            reduced_motion: true,
        }
    );

    let mut app = App::new(settings);
    assert_eq!(app.architecture(), Architecture::Elmo);
    assert_eq!(app.step(), Step::FIRST);
    app.next_step();
    assert!(app.transition_mut().is_none());
}

#[test]
fn config_without_app_table_uses_defaults_for_options() {
    let config = load("# nothing configured\n");
    let settings = AppSettings::resolve(Some(&config));
    assert!(!settings.autoplay);
    assert_eq!(settings.ui_options, UiOptions::default());
}

#[test]
fn malformed_config_reports_its_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app]\nautoplay = \"yes please\"\n").expect("write config");

    let err = EmbedscopeConfig::load_from(&path).expect_err("bad type should fail");
    assert_eq!(err.path(), &path);
    assert!(err.to_string().contains("config.toml"));
}
