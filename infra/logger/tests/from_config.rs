use sellit_domain::config::LoggingConfig;
use sellit_logger::{Logger, LoggerError};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn from_config_writes_json_records_into_directory() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "debug".to_owned(),
        directory: Some(log_dir.clone()),
        json: true,
        max_files: 3,
    };

    let logger = Logger::from_config("sellit-settings", &config)?;
    assert!(logger.writes_files());
    tracing::debug!(max_retries = 3, "retry budget");

    // The second install in the same process is refused.
    let err = Logger::from_config("sellit-settings", &config).expect_err("already installed");
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with("sellit-settings")))
        .expect("rolling file is named after the logger");

    let contents = fs::read_to_string(&log_file)?;
    let record: serde_json::Value = serde_json::from_str(contents.lines().next().expect("one record"))?;
    assert_eq!(record["level"], "DEBUG");
    assert_eq!(record["fields"]["message"], "retry budget");
    assert_eq!(record["fields"]["max_retries"], 3);
    Ok(())
}

#[test]
#[serial]
fn from_config_rejects_bad_directive() {
    let config = LoggingConfig { level: "sellit=shouting".to_owned(), ..LoggingConfig::default() };

    let err = Logger::from_config("sellit-bad-level", &config).expect_err("invalid directive");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
#[serial]
fn from_config_rejects_zero_max_files() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let config = LoggingConfig {
        directory: Some(tmp_dir.path().to_path_buf()),
        max_files: 0,
        ..LoggingConfig::default()
    };

    let err = Logger::from_config("sellit-no-files", &config).expect_err("zero max_files");
    assert!(err.to_string().contains("max_files"));
    Ok(())
}
