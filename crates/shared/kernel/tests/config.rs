use sellit_kernel::config::{ConfigError, ConfigLoader, load_config, load_settings};
use sellit_kernel::domain::config::ConfigViolation;
use sellit_kernel::domain::constants::{DEFAULT_PAGE_SIZE, MAX_RETRIES};
use std::collections::HashMap;
use std::fs;
use tempfile::{TempDir, tempdir};

fn write_settings(contents: &str) -> Result<(TempDir, std::path::PathBuf), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("sellit.toml");
    fs::write(&path, contents)?;
    Ok((dir, path))
}

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn missing_file_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let settings = ConfigLoader::new(dir.path().join("absent"))
        .required(false)
        .env_source(env(&[]))
        .settings()?;

    assert_eq!(settings.pagination.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(settings.retry.max_retries, MAX_RETRIES);
    Ok(())
}

#[test]
fn load_settings_accepts_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let settings = load_settings(Some(dir.path().join("absent")))?;
    assert!(settings.pagination.max_page_size >= settings.pagination.page_size);
    Ok(())
}

#[test]
fn required_file_must_exist() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let err = load_config::<shapes::Anything>(Some(dir.path().join("absent")))
        .expect_err("required file is missing");

    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
    Ok(())
}

#[test]
fn file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = write_settings(
        r#"
        [pagination]
        page_size = 50

        [logging]
        level = "debug"
        "#,
    )?;

    let settings = ConfigLoader::new(&path).env_source(env(&[])).settings()?;
    assert_eq!(settings.pagination.page_size, 50);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.retry.max_retries, MAX_RETRIES);
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = write_settings("[pagination]\npage_size = 50\n")?;

    let settings = ConfigLoader::new(&path)
        .env_source(env(&[
            ("SELLIT__PAGINATION__PAGE_SIZE", "75"),
            ("SELLIT__RETRY__MAX_RETRIES", "5"),
            ("OTHER__RETRY__MAX_RETRIES", "9"),
        ]))
        .settings()?;

    assert_eq!(settings.pagination.page_size, 75);
    assert_eq!(settings.retry.max_retries, 5);
    Ok(())
}

#[test]
fn invalid_settings_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = write_settings("[pagination]\npage_size = 0\n")?;

    let err = ConfigLoader::new(&path).env_source(env(&[])).settings().expect_err("zero page size");
    match err {
        ConfigError::Invalid { source, context } => {
            assert_eq!(source, ConfigViolation::ZeroPageSize);
            assert_eq!(context.as_deref(), Some("Settings rejected"));
        }
        other @ ConfigError::Config { .. } => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn malformed_values_are_config_errors() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = write_settings("[retry]\nmax_retries = \"many\"\n")?;

    let err = ConfigLoader::new(&path).env_source(env(&[])).settings().expect_err("not a number");
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}

#[test]
fn file_exists_checks_known_extensions() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, _path) = write_settings("")?;

    assert!(ConfigLoader::new(dir.path().join("sellit")).file_exists());
    assert!(!ConfigLoader::new(dir.path().join("other")).file_exists());
    Ok(())
}

#[test]
fn dotted_base_name_finds_appended_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("sellit.local.toml"), "[pagination]\npage_size = 42\n")?;
    fs::write(dir.path().join("sellit.toml"), "[pagination]\npage_size = 7\n")?;

    let loader = ConfigLoader::new(dir.path().join("sellit.local")).required(false).env_source(env(&[]));
    assert!(loader.file_exists());
    assert_eq!(loader.settings()?.pagination.page_size, 42);

    let absent = ConfigLoader::new(dir.path().join("sellit.staging"));
    assert!(!absent.file_exists(), "sellit.toml must not stand in for sellit.staging.toml");
    Ok(())
}

mod shapes {
    /// Accepts any shape; only used to exercise file lookup.
    #[derive(Debug, serde::Deserialize)]
    pub(crate) struct Anything {}
}
