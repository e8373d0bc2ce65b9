//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::expand_tilde;
use crate::Config;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when neither `RUST_LOG` nor `trace_level` is usable.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG`, if set and valid
/// 2. `config.trace_level`, if set and valid
/// 3. `"info"`
///
/// # Output
///
/// Log lines go to `config.trace_file` (tilde-expanded, parent directories
/// created, no ANSI colors) through a [`FileWriter`]. Without a file, or if its
/// directory cannot be created, they go to stderr.
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber, later calls are
/// no-ops.
///
/// # Example
///
/// ```rust
/// use searchpanel::observability::init_tracing;
/// use searchpanel::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let file_layer = config
        .trace_file
        .as_deref()
        .and_then(prepare_log_file)
        .map(|path| fmt::layer().with_ansi(false).with_writer(FileWriter::new(path)));

    let stderr_layer = file_layer
        .is_none()
        .then(|| fmt::layer().with_writer(std::io::stderr));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
}

fn prepare_log_file(trace_file: &str) -> Option<PathBuf> {
    let path = PathBuf::from(expand_tilde(trace_file));

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        // Logging is optional; fall back to stderr.
        fs::create_dir_all(parent).ok()?;
    }

    Some(path)
}
