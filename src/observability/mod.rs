//! Structured logging with optional size-rotated file output.
//!
//! Every state transition in [`crate::app`] emits `tracing` spans and debug
//! events. This module installs the subscriber that turns them into log lines.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr | FileWriter → log file (+ 3 backups)
//! ```
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Setting `trace_file` sends output to that file instead of stderr.
//!
//! # Usage
//!
//! ```rust
//! use searchpanel::observability::init_tracing;
//! use searchpanel::Config;
//!
//! init_tracing(&Config::default());
//!
//! tracing::debug!("panel ready");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
