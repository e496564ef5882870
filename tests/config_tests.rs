use chrono::Duration;
use std::fs;
use tempfile::TempDir;
use weektracker::config::Config;
use weektracker::errors::AppError;

#[test]
fn test_reads_every_field() {
    let cfg = Config::from_yaml(
        r"
data_dir: /srv/weeks
standard_work_day_minutes: 450
workweek_hours: 30
editor: vim
",
    )
    .unwrap();

    assert_eq!(cfg.data_dir, "/srv/weeks");
    assert_eq!(cfg.standard_work_day(), Duration::minutes(450));
    assert_eq!(cfg.weekly_target(), Duration::hours(30));
    assert_eq!(cfg.editor.as_deref(), Some("vim"));
}

#[test]
fn test_missing_fields_take_defaults() {
    let cfg = Config::from_yaml("workweek_hours: 32\n").unwrap();

    assert_eq!(cfg.workweek_hours, 32);
    assert_eq!(cfg.standard_work_day_minutes, 480);
    assert_eq!(cfg.editor, None);
    assert!(cfg.data_dir.ends_with("week-files"));
}

#[test]
fn test_empty_file_is_all_defaults() {
    let cfg = Config::from_yaml("").unwrap();
    assert_eq!(cfg.standard_work_day(), Duration::hours(8));
    assert_eq!(cfg.weekly_target(), Duration::hours(40));
}

#[test]
fn test_missing_file_is_all_defaults() {
    let dir = TempDir::new().unwrap();
    let cfg = Config::load(&dir.path().join("nope.yaml")).unwrap();
    assert_eq!(cfg.workweek_hours, 40);
}

#[test]
fn test_malformed_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weektracker.yaml");
    fs::write(&path, "workweek_hours: [forty\n").unwrap();

    assert!(matches!(Config::load(&path), Err(AppError::Config(_))));
}

#[test]
fn test_tilde_in_data_dir_is_expanded() {
    let cfg = Config::from_yaml("data_dir: ~/weeks\n").unwrap();
    if let Some(home) = dirs::home_dir() {
        assert_eq!(cfg.data_path(), home.join("weeks"));
    }
}

#[test]
fn test_init_keeps_existing_file_and_creates_data_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weektracker.yaml");
    let data_dir = dir.path().join("weeks");
    let content = format!("data_dir: {}\nworkweek_hours: 35\n", data_dir.display());
    fs::write(&path, &content).unwrap();

    assert!(!Config::init_all(&path).unwrap());
    assert!(data_dir.is_dir());
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}
