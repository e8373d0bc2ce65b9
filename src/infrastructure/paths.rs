//! Path utilities for configuration and log files.
//!
//! Handles tilde expansion and the XDG configuration location. Both read the
//! environment on every call, so tests can point them elsewhere.

use std::env;
use std::path::PathBuf;

/// Directory name under the configuration root.
const APP_DIR: &str = "searchpanel";

/// Returns the default configuration file path.
///
/// Resolves to `$XDG_CONFIG_HOME/searchpanel/config.toml`, or
/// `$HOME/.config/searchpanel/config.toml` when `XDG_CONFIG_HOME` is unset or
/// empty. Returns `None` if neither variable is available.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_root(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
        .map(|root| root.join(APP_DIR).join("config.toml"))
}

fn config_root(xdg_config_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            home.filter(|dir| !dir.is_empty())
                .map(|dir| PathBuf::from(dir).join(".config"))
        })
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or any path when `HOME` is unset, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use searchpanel::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/var/log/panel.log"), "/var/log/panel.log");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_with_home(path, env::var("HOME").ok().as_deref())
}

fn expand_with_home(path: &str, home: Option<&str>) -> String {
    let Some(home) = home.filter(|home| !home.is_empty()) else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}
