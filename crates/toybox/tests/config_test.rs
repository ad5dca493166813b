//! Tests for loading harness configuration.

use std::io::Write;
use toybox::{ClipboardMode, OutputFormat, ToyboxConfig};

#[test]
fn test_defaults_without_file() {
    let config = ToyboxConfig::load(None).expect("defaults");
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(*config.output(), OutputFormat::Text);
    assert_eq!(*config.clipboard(), ClipboardMode::Memory);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
log_filter = "debug"
output = "json"
clipboard = "system"
"#
    )
    .expect("write config");

    let config = ToyboxConfig::from_file(file.path()).expect("valid config");

    assert_eq!(config.log_filter(), "debug");
    assert_eq!(*config.output(), OutputFormat::Json);
    assert_eq!(*config.clipboard(), ClipboardMode::System);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, r#"output = "json""#).expect("write config");

    let config = ToyboxConfig::from_file(file.path()).expect("valid config");

    assert_eq!(*config.output(), OutputFormat::Json);
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(*config.clipboard(), ClipboardMode::Memory);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = ToyboxConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, r#"output = "yaml""#).expect("write config");

    let err = ToyboxConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides_win() {
    let config = ToyboxConfig::default()
        .with_overrides(Some(OutputFormat::Json), Some(ClipboardMode::System));
    assert_eq!(*config.output(), OutputFormat::Json);
    assert_eq!(*config.clipboard(), ClipboardMode::System);

    let unchanged = ToyboxConfig::default().with_overrides(None, None);
    assert_eq!(unchanged, ToyboxConfig::default());
}
