//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and host
//! property updates, translating them into state changes and actions for the
//! host.
//!
//! # Architecture
//!
//! 1. Events arrive from the host (user gestures or bound property writes)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via the request and dialog controllers
//! 4. Actions are collected and returned for the host to execute
//!
//! # Event Types
//!
//! - **Request**: `SetQuery`, `SubmitSearch`, `SetSelectedFilters`, `SetCount`, `LoadMore`
//! - **Loader results**: `SetFilters`, `SetItems`, `SetHasMore`, `SetLoading`
//! - **Dialog**: `OpenFilterDialog`, `DialogMounted`, `TapFilter`, `ToggleValue`,
//!   `ConfirmValues`, `ApplyFilters`, `ResetFilters`, `CloseDialog`
//!
//! # Example
//!
//! ```rust
//! use searchpanel::app::{handle_event, Event, SearchPanel};
//! use searchpanel::domain::Labels;
//!
//! let mut panel = SearchPanel::new(Labels::default());
//! let (should_render, actions) = handle_event(&mut panel, &Event::SetQuery("shoes".into()))?;
//! assert!(should_render);
//! assert!(actions.is_empty()); // first write only initializes
//! # Ok::<(), searchpanel::PanelError>(())
//! ```

use super::actions::Action;
use super::modes::MountTicket;
use super::state::SearchPanel;
use crate::domain::{Filter, Result, SelectionMap};
use serde_json::Value;

/// Events triggered by the user or by the host writing a bound property.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Host or user wrote the query text.
    SetQuery(String),
    /// User submitted the query.
    SubmitSearch,
    /// Host wrote the committed selection through the two-way binding.
    SetSelectedFilters(SelectionMap),
    /// Host wrote the page size through the two-way binding.
    SetCount(usize),
    /// User asked for the next page.
    LoadMore,

    /// Host supplied the filter definitions.
    SetFilters(Option<Vec<Filter>>),
    /// Loader delivered items.
    SetItems(Option<Vec<Value>>),
    /// Loader reported whether more items exist.
    SetHasMore(bool),
    /// Loader started or finished a fetch.
    SetLoading(bool),

    /// User tapped the filter button.
    OpenFilterDialog,
    /// Host finished mounting the dialog surface for `MountDialog(ticket)`.
    DialogMounted(MountTicket),
    /// User drilled into a filter.
    TapFilter {
        filter_id: String,
    },
    /// User flipped a value checkbox.
    ToggleValue {
        value_id: String,
    },
    /// User confirmed the values of the active filter.
    ConfirmValues,
    /// User tapped the dialog's apply button.
    ApplyFilters,
    /// User tapped the dialog's reset button.
    ResetFilters,
    /// Dialog was dismissed without applying.
    CloseDialog,
}

/// Processes an event, mutates panel state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the view model changed, and the actions
/// to execute in order.
///
/// # Errors
///
/// No event currently fails; the `Result` keeps the signature stable for
/// host-side fallible extensions.
pub fn handle_event(panel: &mut SearchPanel, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetQuery(query) => {
            let actions: Vec<Action> = panel.request.set_query(query.as_str()).into_iter().collect();
            Ok((true, actions))
        }
        Event::SubmitSearch => Ok((false, vec![panel.request.submit_search()])),
        Event::SetSelectedFilters(selected_filters) => {
            let actions: Vec<Action> = panel
                .request
                .set_selected_filters(selected_filters.clone())
                .into_iter()
                .collect();
            Ok((true, actions))
        }
        Event::SetCount(count) => {
            panel.request.set_count(*count);
            Ok((false, vec![]))
        }
        Event::LoadMore => Ok((false, vec![panel.request.load_more()])),

        Event::SetFilters(filters) => {
            if &panel.filters == filters {
                return Ok((false, vec![]));
            }
            tracing::debug!(filters = filters.as_ref().map_or(0, Vec::len), "filters updated");
            panel.filters.clone_from(filters);
            Ok((true, vec![]))
        }
        Event::SetItems(items) => {
            tracing::debug!(items = ?items.as_ref().map(Vec::len), "items updated");
            panel.items.clone_from(items);
            Ok((true, vec![]))
        }
        Event::SetHasMore(has_more) => {
            let changed = panel.has_more != *has_more;
            panel.has_more = *has_more;
            Ok((changed, vec![]))
        }
        Event::SetLoading(loading) => {
            let changed = panel.loading != *loading;
            panel.loading = *loading;
            Ok((changed, vec![]))
        }

        Event::OpenFilterDialog => {
            if panel.is_filter_button_disabled() {
                tracing::debug!("no filters available, ignoring filter dialog request");
                return Ok((false, vec![]));
            }
            let ticket = panel.dialog.open();
            Ok((true, vec![Action::MountDialog(ticket)]))
        }
        Event::DialogMounted(ticket) => {
            let started = panel
                .dialog
                .confirm_mount(*ticket, panel.request.selected_filters());
            Ok((started, vec![]))
        }
        Event::TapFilter { filter_id } => {
            let Some(filter) = panel.find_filter(filter_id).cloned() else {
                tracing::debug!(filter_id = %filter_id, "tapped filter is unknown");
                return Ok((false, vec![]));
            };
            Ok((panel.dialog.select_filter(&filter), vec![]))
        }
        Event::ToggleValue { value_id } => Ok((panel.dialog.toggle_value(value_id), vec![])),
        Event::ConfirmValues => Ok((panel.dialog.confirm_values(), vec![])),
        Event::ApplyFilters => {
            let Some(selected_filters) = panel.dialog.apply() else {
                return Ok((false, vec![]));
            };

            let mut actions: Vec<Action> = panel
                .request
                .set_selected_filters(selected_filters.clone())
                .into_iter()
                .collect();
            actions.push(Action::Save { selected_filters });
            actions.push(Action::DetachDialog);
            Ok((true, actions))
        }
        Event::ResetFilters => Ok((panel.dialog.reset(), vec![])),
        Event::CloseDialog => {
            if panel.dialog.close() {
                Ok((true, vec![Action::DetachDialog]))
            } else {
                Ok((false, vec![]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::DialogMode;
    use crate::domain::{FilterValue, Labels};

    fn panel() -> SearchPanel {
        let mut panel = SearchPanel::new(Labels::default());
        handle_event(
            &mut panel,
            &Event::SetFilters(Some(vec![Filter::new(
                "age",
                "Age",
                vec![FilterValue::new("child", "Child"), FilterValue::new("teen", "Teen")],
            )])),
        )
        .unwrap();
        handle_event(&mut panel, &Event::SetQuery(String::new())).unwrap();
        handle_event(&mut panel, &Event::SetSelectedFilters(SelectionMap::new())).unwrap();
        panel
    }

    fn send(panel: &mut SearchPanel, event: Event) -> Vec<Action> {
        handle_event(panel, &event).unwrap().1
    }

    fn open(panel: &mut SearchPanel) {
        let actions = send(panel, Event::OpenFilterDialog);
        let [Action::MountDialog(ticket)] = actions.as_slice() else {
            panic!("expected mount request, got {actions:?}");
        };
        send(panel, Event::DialogMounted(*ticket));
    }

    #[test]
    fn apply_emits_reload_then_save_then_detach() {
        let mut panel = panel();
        open(&mut panel);
        send(&mut panel, Event::TapFilter { filter_id: "age".into() });
        send(&mut panel, Event::ToggleValue { value_id: "child".into() });
        send(&mut panel, Event::ConfirmValues);

        let actions = send(&mut panel, Event::ApplyFilters);

        let expected: SelectionMap = [("age", vec!["child"])].into_iter().collect();
        assert_eq!(actions.len(), 3);
        assert!(matches!(&actions[0], Action::ChangeRequestParams(p) if p.selected_filters == expected));
        assert_eq!(
            actions[1],
            Action::Save {
                selected_filters: expected.clone()
            }
        );
        assert_eq!(actions[2], Action::DetachDialog);
        assert_eq!(panel.request.selected_filters(), &expected);
    }

    #[test]
    fn first_apply_reloads_without_prior_selection_write() {
        let mut panel = SearchPanel::new(Labels::default());
        handle_event(
            &mut panel,
            &Event::SetFilters(Some(vec![Filter::new("age", "Age", vec![FilterValue::new("child", "Child")])])),
        )
        .unwrap();
        handle_event(&mut panel, &Event::SetQuery(String::new())).unwrap();
        open(&mut panel);
        send(&mut panel, Event::TapFilter { filter_id: "age".into() });
        send(&mut panel, Event::ToggleValue { value_id: "child".into() });
        send(&mut panel, Event::ConfirmValues);

        let actions = send(&mut panel, Event::ApplyFilters);

        let expected: SelectionMap = [("age", vec!["child"])].into_iter().collect();
        assert_eq!(actions.len(), 3);
        assert!(matches!(&actions[0], Action::ChangeRequestParams(p) if p.selected_filters == expected && p.count == 20));
        assert!(matches!(&actions[1], Action::Save { .. }));
    }

    #[test]
    fn apply_without_changes_saves_without_reload() {
        let mut panel = panel();
        open(&mut panel);

        let actions = send(&mut panel, Event::ApplyFilters);

        assert_eq!(
            actions,
            vec![
                Action::Save {
                    selected_filters: SelectionMap::new()
                },
                Action::DetachDialog
            ]
        );
    }

    #[test]
    fn open_is_ignored_without_filters() {
        let mut panel = SearchPanel::new(Labels::default());

        let (render, actions) = handle_event(&mut panel, &Event::OpenFilterDialog).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(panel.dialog.mode(), DialogMode::Closed);
    }

    #[test]
    fn session_copies_committed_at_mount_time() {
        let mut panel = panel();
        let actions = send(&mut panel, Event::OpenFilterDialog);
        let Action::MountDialog(ticket) = actions[0] else {
            panic!("expected mount request");
        };

        let committed: SelectionMap = [("age", vec!["teen"])].into_iter().collect();
        send(&mut panel, Event::SetSelectedFilters(committed.clone()));
        send(&mut panel, Event::DialogMounted(ticket));

        assert_eq!(panel.dialog.staged(), &committed);
    }

    #[test]
    fn close_discards_and_detaches() {
        let mut panel = panel();
        open(&mut panel);
        send(&mut panel, Event::TapFilter { filter_id: "age".into() });
        send(&mut panel, Event::ToggleValue { value_id: "teen".into() });
        send(&mut panel, Event::ConfirmValues);

        let actions = send(&mut panel, Event::CloseDialog);

        assert_eq!(actions, vec![Action::DetachDialog]);
        assert!(panel.request.selected_filters().is_empty());
        assert!(send(&mut panel, Event::CloseDialog).is_empty());
    }

    #[test]
    fn unknown_filter_tap_is_ignored() {
        let mut panel = panel();
        open(&mut panel);

        let (render, _) = handle_event(&mut panel, &Event::TapFilter { filter_id: "colour".into() }).unwrap();

        assert!(!render);
        assert_eq!(panel.dialog.mode(), DialogMode::FilterList);
    }

    #[test]
    fn load_more_and_submit() {
        let mut panel = panel();

        let actions = send(&mut panel, Event::LoadMore);
        assert!(matches!(&actions[..], [Action::ChangeRequestParams(p)] if p.count == 40));

        send(&mut panel, Event::SetQuery("boots".into()));
        assert_eq!(panel.request.count(), 20);
        assert_eq!(
            send(&mut panel, Event::SubmitSearch),
            vec![Action::Search {
                query: "boots".to_string()
            }]
        );
    }
}
