//! Config file loading tests.

use santa_games::GameConfig;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_loads_full_config() {
    let file = write_config(
        r#"
think_delay_min_ms = 100
think_delay_jitter_ms = 50
log_file = "elves.log"
seed = 2024
"#,
    );
    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.think_delay_min_ms(), 100);
    assert_eq!(*config.think_delay_jitter_ms(), 50);
    assert_eq!(config.log_file(), &PathBuf::from("elves.log"));
    assert_eq!(*config.seed(), Some(2024));
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = write_config("seed = 1\n");
    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.think_delay_min_ms(), 450);
    assert_eq!(*config.think_delay_jitter_ms(), 250);
    assert_eq!(config.log_file(), &PathBuf::from("santa_games.log"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_from_file_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_bad_toml_is_an_error() {
    let file = write_config("think_delay_min_ms = \"soon\"\n");
    let err = GameConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_seeded_configs_build_identical_santas() {
    use santa_tictactoe::{Board, Opponent};

    let file = write_config("seed = 5\n");
    let config = GameConfig::from_file(file.path()).expect("valid config");
    let mut a = config.santa();
    let mut b = config.santa();
    let board = Board::new();
    for _ in 0..5 {
        assert_eq!(a.choose_move(&board), b.choose_move(&board));
    }
}
