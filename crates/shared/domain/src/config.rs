use crate::constants::{DEFAULT_PAGE_SIZE, MAX_RETRIES};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_MAX_FILES: usize = 10;
const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
const DEFAULT_INITIAL_DELAY_MS: u64 = 100;
const DEFAULT_BACKOFF_MULTIPLIER: u32 = 5;

/// Top-level runtime settings shared across subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub logging: LoggingConfig,
    pub pagination: PaginationConfig,
    pub retry: RetryConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl AppConfig {
    /// Checks every section, reporting the first violation found.
    ///
    /// # Errors
    /// Returns the [`ConfigViolation`] describing the offending setting.
    pub fn validate(&self) -> Result<(), ConfigViolation> {
        self.logging.validate()?;
        self.pagination.validate()?;
        self.retry.validate()
    }
}

/// Why a loaded configuration cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigViolation {
    #[error("logging.level must not be empty")]
    EmptyLogLevel,
    #[error("logging.max_files must be greater than zero")]
    ZeroMaxFiles,
    #[error("pagination.page_size must be greater than zero")]
    ZeroPageSize,
    #[error("pagination.page_size ({page_size}) exceeds pagination.max_page_size ({max_page_size})")]
    PageSizeAboveMax { page_size: u32, max_page_size: u32 },
    #[error("retry.backoff_multiplier must be at least 1")]
    ZeroBackoffMultiplier,
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level or filter directive, e.g. `info` or `sellit=debug`.
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), ConfigViolation> {
        if self.level.trim().is_empty() {
            return Err(ConfigViolation::EmptyLogLevel);
        }
        if self.max_files == 0 {
            return Err(ConfigViolation::ZeroMaxFiles);
        }
        Ok(())
    }
}

/// Page sizing for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub page_size: u32,
    pub max_page_size: u32,
}

impl PaginationConfig {
    /// Resolves the page size for a request.
    ///
    /// Missing or zero falls back to `page_size`; anything above
    /// `max_page_size` is capped.
    #[must_use]
    pub fn clamp(&self, requested: Option<u32>) -> u32 {
        match requested {
            None | Some(0) => self.page_size,
            Some(size) => size.min(self.max_page_size),
        }
    }

    /// Zero-based item offset of a one-based `page`. Page `0` is treated as the first page.
    #[must_use]
    pub fn offset(&self, page: u32, requested: Option<u32>) -> u64 {
        u64::from(page.saturating_sub(1)) * u64::from(self.clamp(requested))
    }

    fn validate(&self) -> Result<(), ConfigViolation> {
        if self.page_size == 0 {
            return Err(ConfigViolation::ZeroPageSize);
        }
        if self.page_size > self.max_page_size {
            return Err(ConfigViolation::PageSizeAboveMax {
                page_size: self.page_size,
                max_page_size: self.max_page_size,
            });
        }
        Ok(())
    }
}

/// Exponential backoff for retried operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub backoff_multiplier: u32,
}

impl RetryConfig {
    /// Total attempts including the first one.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before the `retry`-th retry (1-based): `initial * multiplier^(retry - 1)`.
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = u64::from(self.backoff_multiplier).saturating_pow(retry.saturating_sub(1));
        Duration::from_millis(self.initial_delay_ms.saturating_mul(factor))
    }

    const fn validate(&self) -> Result<(), ConfigViolation> {
        if self.backoff_multiplier == 0 {
            return Err(ConfigViolation::ZeroBackoffMultiplier);
        }
        Ok(())
    }
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_owned(),
            directory: None,
            json: false,
            max_files: DEFAULT_LOG_MAX_FILES,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, max_page_size: DEFAULT_MAX_PAGE_SIZE }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
        }
    }
}
