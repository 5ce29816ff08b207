use sellit_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_only_logger_writes_plain_text_without_ansi() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("nested").join("logs");

    let logger = Logger::builder()
        .name("sellit-file")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .max_files(2)
        .init()?;

    assert!(logger.writes_files());
    tracing::info!(page_size = 20, "listing page served");
    tracing::debug!("filtered out below info");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("listing page served"));
    assert!(contents.contains("page_size=20"));
    assert!(!contents.contains("filtered out below info"));
    assert!(!contents.contains('\u{1b}'), "file output has no colour codes");
    Ok(())
}
