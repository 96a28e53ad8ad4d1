use std::fs;

use livescroll::config::Config;
use livescroll::layout::SnapPolicy;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.markers, vec!["current".to_string()]);
    assert!(!config.snap_to_top);
    assert_eq!(config.nav_bar_height, 0.0);
    assert_eq!(config.bottom_margin, 48.0);
    assert_eq!(config.viewport_height, 800.0);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "snap_to_top = true\nmarkers = [\"tom\"]\n").unwrap();

    let config = Config::load_from(&path);

    assert!(config.snap_to_top);
    assert_eq!(config.markers, vec!["tom".to_string()]);
    assert_eq!(config.bottom_margin, 48.0);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "snap_to_top = \"sometimes\"").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = Config {
        markers: vec!["tom".to_string(), "dick".to_string()],
        nav_bar_height: 52.0,
        ..Config::default()
    };

    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_conversions() {
    let config = Config {
        snap_to_top: true,
        nav_bar_height: 40.0,
        bottom_margin: 10.0,
        ..Config::default()
    };

    let options = config.scroller_options().unwrap();
    assert_eq!(options.snap, SnapPolicy::Top);
    assert_eq!(options.markers.iter().collect::<Vec<_>>(), vec!["current"]);

    let metrics = config.layout_metrics();
    assert_eq!(metrics.nav_bar_height, 40.0);
    assert_eq!(metrics.bottom_margin, 10.0);
}

#[test]
fn test_bad_marker_in_config_is_rejected() {
    let config = Config {
        markers: vec!["not ok".to_string()],
        ..Config::default()
    };
    assert!(config.scroller_options().is_err());
}
