use config::{Config, Environment, File, Map};
use sellit_domain::config::{AppConfig, ConfigViolation};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Prefix of environment overrides, e.g. `SELLIT__PAGINATION__PAGE_SIZE`.
pub const ENV_PREFIX: &str = "SELLIT";
/// Separator between the prefix and each nesting level of an override.
pub const ENV_SEPARATOR: &str = "__";
/// Settings file looked up when no path is given, with any supported extension.
pub const DEFAULT_CONFIG_PATH: &str = "sellit";

const KNOWN_EXTENSIONS: &[&str] = &["toml", "json", "yaml", "yml", "ini", "ron", "json5"];

/// Custom error type for config loading.
#[sellit_derive::sellit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid settings{}: {source}", format_context(.context))]
    Invalid { source: ConfigViolation, context: Option<Cow<'static, str>> },
}

/// Layered loader: a settings file overlaid with `SELLIT__` environment variables.
///
/// Nested keys use double underscores, so `SELLIT__RETRY__MAX_RETRIES=5` maps to
/// `retry.max_retries`. Values that look like numbers or booleans are parsed as such.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    required: bool,
    env: Option<Map<String, String>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_PATH)
    }
}

impl ConfigLoader {
    /// Creates a loader for `path`. The file is required until [`Self::required`] says otherwise.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf(), required: true, env: None }
    }

    /// Whether a missing file is an error.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Reads overrides from `vars` instead of the process environment.
    #[must_use]
    pub fn env_source<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` if the path exists as given or with one of the supported extensions.
    ///
    /// Extensions are appended, so `sellit.local` is looked up as `sellit.local.toml`
    /// the same way the file source resolves it.
    #[must_use]
    pub fn file_exists(&self) -> bool {
        self.path.is_file() || KNOWN_EXTENSIONS.iter().any(|ext| self.candidate(ext).is_file())
    }

    fn candidate(&self, ext: &str) -> PathBuf {
        if self.path.extension().is_none() {
            return self.path.with_extension(ext);
        }
        let mut name = self.path.clone().into_os_string();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }

    /// Builds the layered configuration and deserializes it into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if a required file is missing, a source is
    /// malformed, or the merged values do not fit `T`.
    pub fn load<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(self.env.clone());

        let builder = Config::builder()
            .add_source(File::from(self.path.as_path()).required(self.required))
            .add_source(environment);

        info!("Loading config from {}", self.path.display());

        let config = builder
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")?;

        Ok(config)
    }

    /// Loads and validates the application settings.
    ///
    /// A missing file is only logged when the loader is not `required`; the
    /// defaults (seeded from the application constants) are used instead.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] on loading failures and
    /// [`ConfigError::Invalid`] when the merged settings break a rule.
    pub fn settings(&self) -> Result<AppConfig> {
        if !self.required && !self.file_exists() {
            warn!("Settings file {} not found, using defaults", self.path.display());
        }

        let settings: AppConfig = self.load()?;
        settings.validate().context("Settings rejected")?;

        debug!(
            page_size = settings.pagination.page_size,
            max_retries = settings.retry.max_retries,
            level = %settings.logging.level,
            "Settings loaded"
        );

        Ok(settings)
    }
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// `path` defaults to [`DEFAULT_CONFIG_PATH`] and the file must exist.
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use sellit_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Listing {
///     page_size: u32,
/// }
///
/// let cfg: Listing = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    path.map_or_else(ConfigLoader::default, ConfigLoader::new).load()
}

/// Loads the [`AppConfig`], falling back to defaults when the file is absent.
///
/// # Errors
/// See [`ConfigLoader::settings`].
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<AppConfig> {
    path.map_or_else(ConfigLoader::default, ConfigLoader::new).required(false).settings()
}
