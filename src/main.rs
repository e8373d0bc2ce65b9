//! Line-driven host for the search panel.
//!
//! Plays the role a UI toolkit plays in production: it owns the dialog surface
//! and the data loader, translates input lines into [`Event`]s, executes the
//! returned [`Action`]s and renders the panel after every line.
//!
//! # Usage
//!
//! ```text
//! searchpanel [FILTERS_JSON] [--config CONFIG_TOML]
//! ```
//!
//! Without `--config` the file at `$XDG_CONFIG_HOME/searchpanel/config.toml`
//! is used if present.
//!
//! # Commands
//!
//! - `query <text>`: write the query
//! - `search`: submit the query
//! - `more`: load the next page
//! - `count <n>`: write the page size
//! - `items <n>` / `items none`: deliver `n` placeholder items
//! - `has-more on|off`, `loading on|off`: loader state
//! - `filters <path>`: load filter definitions from a JSON file
//! - `open`, `tap <filter>`, `toggle <value>`, `ok`, `reset`, `apply`, `close`: dialog
//! - `quit`
//!
//! # Dialog Mounting
//!
//! `MountDialog` is answered with `DialogMounted` after every event already
//! queued for the current line, which models the one-tick delay of a real
//! surface.

#![allow(clippy::multiple_crate_versions)]

use searchpanel::domain::{Filter, SelectionMap};
use searchpanel::{handle_event, Action, Config, Event, PanelError, Result, SearchPanel};
use serde_json::Value;
use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("searchpanel: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Parsed command-line arguments.
#[derive(Debug, Default)]
struct Args {
    filters: Option<String>,
    config: Option<String>,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if arg == "--config" {
                let path = args
                    .next()
                    .ok_or_else(|| PanelError::Config("--config requires a path".to_string()))?;
                parsed.config = Some(path);
            } else if parsed.filters.is_none() {
                parsed.filters = Some(arg);
            } else {
                return Err(PanelError::Config(format!("unexpected argument `{arg}`")));
            }
        }

        Ok(parsed)
    }
}

fn run() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default()?,
    };
    searchpanel::observability::init_tracing(&config);

    let span = tracing::debug_span!("host_load");
    let guard = span.entered();

    let mut host = Host::new(searchpanel::initialize(&config));
    // Initial binding writes; the host performs its own first load.
    host.dispatch(Event::SetQuery(String::new()))?;
    host.dispatch(Event::SetSelectedFilters(SelectionMap::new()))?;
    if let Some(path) = &args.filters {
        host.dispatch(Event::SetFilters(Some(load_filters(path)?)))?;
    }
    drop(guard);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    searchpanel::ui::render(&host.panel, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == "quit" {
            break;
        }

        match parse_command(command) {
            Ok(event) => {
                for output in host.dispatch(event)? {
                    writeln!(stdout, "> {output}")?;
                }
            }
            Err(e) => writeln!(stdout, "! {e}")?,
        }
        searchpanel::ui::render(&host.panel, &mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}

/// Owns the panel and stands in for the dialog surface.
struct Host {
    panel: SearchPanel,
    queue: VecDeque<Event>,
}

impl Host {
    fn new(panel: SearchPanel) -> Self {
        Self {
            panel,
            queue: VecDeque::new(),
        }
    }

    /// Handles `event` and every event its actions schedule.
    ///
    /// Returns one printable line per notification for the embedding page.
    fn dispatch(&mut self, event: Event) -> Result<Vec<String>> {
        self.queue.push_back(event);
        let mut output = Vec::new();

        while let Some(event) = self.queue.pop_front() {
            let (should_render, actions) = handle_event(&mut self.panel, &event)?;
            tracing::debug!(
                action_count = actions.len(),
                should_render = should_render,
                "event handled"
            );

            for action in actions {
                if let Some(line) = self.execute_action(action)? {
                    output.push(line);
                }
            }
        }

        Ok(output)
    }

    fn execute_action(&mut self, action: Action) -> Result<Option<String>> {
        let line = match action {
            Action::MountDialog(ticket) => {
                tracing::debug!(ticket = ticket.id(), "mounting dialog surface");
                self.queue.push_back(Event::DialogMounted(ticket));
                return Ok(None);
            }
            Action::DetachDialog => {
                tracing::debug!("detaching dialog surface");
                return Ok(None);
            }
            Action::ChangeRequestParams(params) => {
                format!("changeRequestParams {}", serde_json::to_string(&params)?)
            }
            Action::Search { query } => format!("search {}", serde_json::to_string(&query)?),
            Action::Save { selected_filters } => {
                format!("save {}", serde_json::to_string(&selected_filters)?)
            }
        };
        Ok(Some(line))
    }
}

fn load_filters<P: AsRef<Path>>(path: P) -> Result<Vec<Filter>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn parse_switch(value: &str) -> std::result::Result<bool, String> {
    match value {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        other => Err(format!("expected on/off, got `{other}`")),
    }
}

fn parse_command(line: &str) -> std::result::Result<Event, String> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let event = match command {
        "query" => Event::SetQuery(rest.to_string()),
        "search" => Event::SubmitSearch,
        "more" => Event::LoadMore,
        "count" => Event::SetCount(rest.parse().map_err(|e| format!("bad count: {e}"))?),
        "items" if rest == "none" => Event::SetItems(None),
        "items" => {
            let n: usize = rest.parse().map_err(|e| format!("bad item count: {e}"))?;
            Event::SetItems(Some((0..n).map(|i| Value::from(i as u64)).collect()))
        }
        "has-more" => Event::SetHasMore(parse_switch(rest)?),
        "loading" => Event::SetLoading(parse_switch(rest)?),
        "filters" => Event::SetFilters(Some(load_filters(rest).map_err(|e| e.to_string())?)),
        "open" => Event::OpenFilterDialog,
        "tap" => Event::TapFilter {
            filter_id: rest.to_string(),
        },
        "toggle" => Event::ToggleValue {
            value_id: rest.to_string(),
        },
        "ok" => Event::ConfirmValues,
        "reset" => Event::ResetFilters,
        "apply" => Event::ApplyFilters,
        "close" => Event::CloseDialog,
        other => return Err(format!("unknown command `{other}`")),
    };

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchpanel::domain::{FilterValue, Labels};

    fn host() -> Host {
        let mut host = Host::new(SearchPanel::new(Labels::default()));
        host.dispatch(Event::SetQuery(String::new())).unwrap();
        host.dispatch(Event::SetSelectedFilters(SelectionMap::new())).unwrap();
        host.dispatch(Event::SetFilters(Some(vec![Filter::new(
            "age",
            "Age",
            vec![FilterValue::new("child", "Child")],
        )])))
        .unwrap();
        host
    }

    #[test]
    fn mount_is_confirmed_within_the_same_dispatch() {
        let mut host = host();

        assert!(host.dispatch(Event::OpenFilterDialog).unwrap().is_empty());

        assert!(host.panel.dialog.mode().is_open());
        assert!(matches!(
            host.panel.compute_viewmodel().dialog,
            Some(searchpanel::ui::DialogView::FilterList { .. })
        ));
    }

    #[test]
    fn apply_prints_reload_and_save() {
        let mut host = host();
        for command in ["open", "tap age", "toggle child", "ok"] {
            host.dispatch(parse_command(command).unwrap()).unwrap();
        }

        let output = host.dispatch(Event::ApplyFilters).unwrap();

        assert_eq!(
            output,
            vec![
                r#"changeRequestParams {"query":"","selected_filters":{"age":["child"]},"count":20}"#.to_string(),
                r#"save {"age":["child"]}"#.to_string(),
            ]
        );
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("query red boots"), Ok(Event::SetQuery("red boots".into())));
        assert_eq!(parse_command("loading on"), Ok(Event::SetLoading(true)));
        assert_eq!(parse_command("items none"), Ok(Event::SetItems(None)));
        assert!(parse_command("loading maybe").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn parses_args() {
        let args = Args::parse(["filters.json", "--config", "c.toml"].map(String::from)).unwrap();

        assert_eq!(args.filters.as_deref(), Some("filters.json"));
        assert_eq!(args.config.as_deref(), Some("c.toml"));
        assert!(Args::parse(["--config".to_string()]).is_err());
    }
}
