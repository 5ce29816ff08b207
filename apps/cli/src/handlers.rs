use sellit::domain::config::{AppConfig, LoggingConfig};
use sellit::registry::{ConstantValue, entries};

/// One `NAME = value` line per constant; text values are quoted.
pub(crate) fn render_constants() -> String {
    entries()
        .map(|(key, value)| match value {
            ConstantValue::Text(text) => format!("{key} = {text:?}\n"),
            ConstantValue::Integer(n) => format!("{key} = {n}\n"),
        })
        .collect()
}

/// The `[logging]` section with `--log-level`, when given, replacing `level`.
pub(crate) fn effective_logging(settings: &AppConfig, log_level: Option<&str>) -> LoggingConfig {
    let mut logging = settings.logging.clone();
    if let Some(level) = log_level {
        level.clone_into(&mut logging.level);
    }
    logging
}

pub(crate) fn render_settings(settings: &AppConfig, logging: &LoggingConfig) -> String {
    let directory = logging
        .directory
        .as_ref()
        .map_or_else(|| "<none>".to_owned(), |dir| format!("{:?}", dir.display().to_string()));
    let pagination = &settings.pagination;
    let retry = &settings.retry;

    format!(
        "logging.level = {level:?}\n\
         logging.directory = {directory}\n\
         logging.json = {json}\n\
         logging.max_files = {max_files}\n\
         pagination.page_size = {page_size}\n\
         pagination.max_page_size = {max_page_size}\n\
         retry.max_retries = {max_retries}\n\
         retry.initial_delay_ms = {initial_delay_ms}\n\
         retry.backoff_multiplier = {backoff_multiplier}\n",
        level = logging.level,
        json = logging.json,
        max_files = logging.max_files,
        page_size = pagination.page_size,
        max_page_size = pagination.max_page_size,
        max_retries = retry.max_retries,
        initial_delay_ms = retry.initial_delay_ms,
        backoff_multiplier = retry.backoff_multiplier,
    )
}
