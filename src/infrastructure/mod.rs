//! Infrastructure layer for filesystem and environment interactions.
//!
//! The panel itself never touches the filesystem; only configuration loading
//! and the log file writer resolve paths through this module.

pub mod paths;

pub use paths::{default_config_path, expand_tilde};
