//! Searchpanel: state for a search panel with a staged filter-selection dialog.
//!
//! The crate owns the parts of a search screen that have real behavior and
//! leaves drawing, data fetching and persistence to a host:
//! - A query input, a "more" button and a no-results message
//! - A filter dialog editing a *staged* copy of the committed selection
//! - One unified change notification whenever the loader must re-fetch

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line-driven host (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Request controller (query, count, committed)     │
//! │  - Filter dialog + staged selection store           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────┐                     ┌─────────────────┐
//! │ UI Layer      │                     │ Observability   │
//! │ (ui/)         │                     │ (observability/)│
//! │ - View model  │                     │ - EnvFilter     │
//! │ - Text render │                     │ - Rotating log  │
//! └───────────────┘                     └─────────────────┘
//!         │                                       │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Config paths (infrastructure/)                   │
//! │  - Filters, selections, labels (domain/)            │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Event/action state machine
//! - [`domain`]: Filters, selection maps, labels and errors
//! - [`infrastructure`]: Configuration paths
//! - [`ui`]: View model and plain-text renderer
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/searchpanel/config.toml
//! hide_filter_button = false
//! trace_level = "debug"
//! trace_file = "~/.local/state/searchpanel.log"
//!
//! [labels]
//! save_button = "Apply"
//! ```
//!
//! # Example
//!
//! ```rust
//! use searchpanel::{handle_event, initialize, Action, Config, Event};
//! use searchpanel::domain::{Filter, FilterValue};
//!
//! let mut panel = initialize(&Config::default());
//! let age = Filter::new("age", "Age", vec![FilterValue::new("child", "Child")]);
//! handle_event(&mut panel, &Event::SetFilters(Some(vec![age])))?;
//!
//! let (_, actions) = handle_event(&mut panel, &Event::OpenFilterDialog)?;
//! let Action::MountDialog(ticket) = actions[0] else { unreachable!() };
//! handle_event(&mut panel, &Event::DialogMounted(ticket))?;
//!
//! handle_event(&mut panel, &Event::TapFilter { filter_id: "age".into() })?;
//! handle_event(&mut panel, &Event::ToggleValue { value_id: "child".into() })?;
//! handle_event(&mut panel, &Event::ConfirmValues)?;
//! let (_, actions) = handle_event(&mut panel, &Event::ApplyFilters)?;
//!
//! assert!(actions[0].is_reload());
//! assert!(matches!(actions[1], Action::Save { .. }));
//! assert_eq!(panel.compute_viewmodel().filter_button.selected_count, 1);
//! # Ok::<(), searchpanel::PanelError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Staged Copy
//!
//! The dialog edits an owned deep copy of the committed selection. Nothing
//! reaches the committed selection until Apply, so closing the dialog discards
//! every edit.
//!
//! ## One Reload Signal
//!
//! Query changes, selection changes and "more" all surface as
//! [`Action::ChangeRequestParams`]. The first write of the query only
//! initializes it, since the host performs its own initial load. The committed
//! selection starts as an empty map, so the first Apply reloads.

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, DialogMode, Event, SearchPanel};
pub use domain::{Labels, PanelError, Result};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Panel configuration, read from a TOML file or a host attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Localizable texts.
    pub labels: Labels,

    /// Hides the filter button entirely.
    pub hide_filter_button: bool,

    /// Tracing level or `EnvFilter` directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Logs go to stderr when unset. A leading `~` is expanded.
    pub trace_file: Option<String>,
}

impl Config {
    /// Parses configuration from a flat host attribute map.
    ///
    /// Label keys match the fields of [`Labels`]. Unknown keys are ignored and
    /// unparsable values fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use searchpanel::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("save_button".to_string(), "Apply".to_string());
    /// map.insert("hide_filter_button".to_string(), "true".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.labels.save_button, "Apply");
    /// assert!(config.hide_filter_button);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let mut labels = Labels::default();
        let slots = [
            ("reset_button", &mut labels.reset_button),
            ("save_button", &mut labels.save_button),
            ("no_values_label", &mut labels.no_values_label),
            ("no_results_text", &mut labels.no_results_text),
            ("more_button", &mut labels.more_button),
            ("placeholder", &mut labels.placeholder),
            ("icon", &mut labels.icon),
        ];
        for (key, slot) in slots {
            if let Some(value) = config.get(key) {
                slot.clone_from(value);
            }
        }

        let hide_filter_button = config
            .get("hide_filter_button")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            labels,
            hide_filter_button,
            trace_level: config.get("trace_level").cloned(),
            trace_file: config.get("trace_file").cloned(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Io`] if the file cannot be read and
    /// [`PanelError::Config`] if it is not valid TOML for this structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| PanelError::Config(format!("Failed to parse config TOML: {e}")))
    }

    /// Loads the file at [`infrastructure::default_config_path`], or the
    /// defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_default() -> Result<Self> {
        match infrastructure::default_config_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Creates a panel from configuration.
///
/// Tracing is not installed here; call [`observability::init_tracing`] once
/// at startup.
///
/// # Example
///
/// ```rust
/// use searchpanel::{initialize, Config};
///
/// let config = Config {
///     hide_filter_button: true,
///     ..Default::default()
/// };
///
/// let panel = initialize(&config);
/// assert!(panel.compute_viewmodel().filter_button.hidden);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> SearchPanel {
    tracing::debug!(hide_filter_button = config.hide_filter_button, "initializing search panel");

    let mut panel = SearchPanel::new(config.labels.clone());
    panel.hide_filter_button = config.hide_filter_button;
    panel
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_map_falls_back_on_bad_values() {
        let mut map = BTreeMap::new();
        map.insert("hide_filter_button".to_string(), "maybe".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_map(&map);

        assert!(!config.hide_filter_button);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.labels, Labels::default());
    }

    #[test]
    fn from_file_reads_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "hide_filter_button = true\n\n[labels]\nno_values_label = \"Any\"\n"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert!(config.hide_filter_button);
        assert_eq!(config.labels.no_values_label, "Any");
        assert_eq!(config.labels.more_button, "More");
        assert!(config.trace_file.is_none());
    }

    #[test]
    fn from_file_reports_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hide_filter_button = \"yes\"").unwrap();

        assert!(matches!(Config::from_file(file.path()), Err(PanelError::Config(_))));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::from_file(dir.path().join("missing.toml")),
            Err(PanelError::Io(_))
        ));
    }

    #[test]
    fn initialize_applies_labels() {
        let mut config = Config::default();
        config.labels.placeholder = "Find".to_string();

        let panel = initialize(&config);

        assert_eq!(panel.compute_viewmodel().search_bar.placeholder, "Find");
        assert!(!panel.hide_filter_button);
    }
}
