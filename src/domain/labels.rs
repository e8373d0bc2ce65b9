//! Localizable texts shown by the panel and the filter dialog.
//!
//! Labels are opaque to the state machine: they are passed through to the view
//! model untouched, except for [`Labels::no_values_label`] which is the fallback
//! summary of a filter without selected values.

use serde::{Deserialize, Serialize};

/// All user-facing texts, with English defaults.
///
/// Missing keys in a TOML configuration file fall back to the defaults.
///
/// # Examples
///
/// ```
/// use searchpanel::domain::Labels;
///
/// let labels: Labels = toml::from_str(r#"save_button = "Filter anwenden""#).unwrap();
/// assert_eq!(labels.save_button, "Filter anwenden");
/// assert_eq!(labels.reset_button, "Reset");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Text of the dialog's reset button.
    pub reset_button: String,
    /// Text of the dialog's apply button.
    pub save_button: String,
    /// Summary shown for a filter without selected values.
    pub no_values_label: String,
    /// Message shown when the loader returned no items.
    pub no_results_text: String,
    /// Text of the button loading the next page.
    pub more_button: String,
    /// Placeholder of the empty search input.
    pub placeholder: String,
    /// Icon name shown in the search background.
    pub icon: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            reset_button: "Reset".to_string(),
            save_button: "Save filters".to_string(),
            no_values_label: "No filters yet".to_string(),
            no_results_text: "No matching results found.".to_string(),
            more_button: "More".to_string(),
            placeholder: "Search".to_string(),
            icon: "search".to_string(),
        }
    }
}
