//! Facade crate for `SellIt`.
//! Re-exports the domain and kernel crates and composes application startup.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use sellit::constants::{APP_NAME, DEFAULT_PAGE_SIZE};
//!
//! assert_eq!(APP_NAME, "SellIt");
//! assert_eq!(sellit::banner(), "SellIt v0.1.0");
//! assert!(DEFAULT_PAGE_SIZE > 0);
//! ```

pub use sellit_domain as domain;
pub use sellit_domain::{constants, registry};
pub use sellit_kernel as kernel;

use sellit_domain::config::AppConfig;
use sellit_domain::constants::{APP_NAME, VERSION};
use sellit_kernel::config::{ConfigError, load_settings};
use std::path::Path;
use tracing::{debug, info};

/// Human-readable product line, e.g. `SellIt v0.1.0`.
#[must_use]
pub fn banner() -> String {
    format!("{APP_NAME} v{VERSION}")
}

/// Loads the application settings and reports the compiled-in constants.
///
/// Call once at startup, after the logger is installed.
///
/// # Errors
/// Returns an error if the settings cannot be loaded or fail validation.
pub fn init(settings_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    info!("Starting {}", banner());
    for (key, value) in registry::entries() {
        debug!(%key, %value, "constant");
    }

    load_settings(settings_path)
}
