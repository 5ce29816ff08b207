use sellit_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn scoped_runs_the_closure_without_installing_globally() -> Result<(), LoggerError> {
    let page_size = Logger::scoped("warn", || {
        tracing::warn!("settings file missing, using defaults");
        20
    })?;
    assert_eq!(page_size, 20);

    let logger = Logger::builder().name("after-scoped").level(LevelFilter::WARN).init()?;
    assert!(!logger.writes_files());
    Ok(())
}

#[test]
fn scoped_rejects_bad_directives() {
    let err = Logger::scoped("sellit=whisper", || ()).expect_err("unknown level");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
