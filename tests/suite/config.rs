//! Config file loading feeding run settings

use std::time::Duration;

use specimen_config::{ConfigError, RunSettings, SpecimenConfig};

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[app]\ntag = \"Custom\"\n\n[sequence]\nmax_items = 3\n\n[fetch]\ndelay_ms = 0\n",
    )
    .expect("write config");

    let config = SpecimenConfig::load_from(&path).unwrap();
    let settings = RunSettings::resolve_with(Some(&config), None);

    assert_eq!(
        settings,
        RunSettings {
            tag: "Custom".to_string(),
            max_items: 3,
            fetch_delay: Duration::ZERO,
        }
    );
}

#[test]
fn malformed_config_is_reported_with_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[fetch]\ndelay_ms = \"slow\"\n").expect("write config");

    match SpecimenConfig::load_from(&path) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}
