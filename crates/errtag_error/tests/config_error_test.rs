use errtag_error::{ConfigError, ConfigErrorKind, ErrtagError, ErrtagErrorKind};

#[test]
fn config_error_records_caller_location() {
    let err = ConfigError::new(ConfigErrorKind::Invalid("max_depth = 0".to_string()));
    assert_eq!(err.line(), line!() - 1);
    assert!(err.file().ends_with("config_error_test.rs"));
}

#[test]
fn config_error_display_includes_kind_and_location() {
    let err = ConfigError::new(ConfigErrorKind::Read("missing.toml".to_string()));
    let text = err.to_string();
    assert!(text.starts_with("Configuration Error: Failed to read configuration"));
    assert!(text.contains("missing.toml"));
    assert!(text.contains("config_error_test.rs"));
}

#[test]
fn config_error_converts_into_errtag_error() {
    let err: ErrtagError = ConfigError::new(ConfigErrorKind::Parse("bad value".to_string())).into();
    match err.kind() {
        ErrtagErrorKind::Config(inner) => {
            assert_eq!(inner.kind(), &ConfigErrorKind::Parse("bad value".to_string()));
        }
    }
    assert!(err.to_string().starts_with("Errtag Error: Configuration Error"));
}

#[test]
fn question_mark_lifts_config_errors() {
    fn load() -> errtag_error::ErrtagResult<u32> {
        Err(ConfigError::new(ConfigErrorKind::Invalid("negative".to_string())))?
    }

    let err = load().unwrap_err();
    assert!(err.to_string().contains("negative"));
}
