//! Error types for the search panel.
//!
//! This module defines the centralized error type [`PanelError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. State transitions
//! themselves never fail; only the edges that touch the outside world (configuration
//! files, log files, the host's dialog surface) can produce errors.

use thiserror::Error;

/// The main error type for search panel operations.
///
/// # Examples
///
/// ```
/// use searchpanel::domain::PanelError;
///
/// fn load_labels() -> Result<(), PanelError> {
///     Err(PanelError::Config("unknown key `colour`".to_string()))
/// }
///
/// assert!(load_labels().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PanelError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from reading configuration files or writing log files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host could not attach the dialog surface to the top-level layer.
    #[error("Dialog mount error: {0}")]
    Mount(String),

    /// A JSON payload supplied by the host was malformed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for search panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;
