//! Staged filter selections edited while the filter dialog is open.
//!
//! The store owns a private copy of the committed selections for the duration of
//! one dialog session. Every edit lands in that copy only; the committed
//! selection changes exactly once, when the session is committed on Apply.
//!
//! # Session Lifecycle
//!
//! ```text
//! begin_session(committed) ──► staged = committed.clone()
//!        │
//!        ├── select_active_filter / toggle_value / toggle_commit_active_filter_values
//!        ├── reset ──► staged = {}
//!        │
//!        ├── commit  ──► staged handed to caller, session ends
//!        └── discard ──► staged dropped, session ends
//! ```

use crate::domain::{DisplayValue, Filter, SelectionMap};

/// Holder of the staged selection and the drill-in projection.
#[derive(Debug, Clone, Default)]
pub struct FilterSelectionStore {
    /// Staged copy of the selections; `None` while no session is running.
    staged: Option<SelectionMap>,

    /// Filter whose values are currently listed, if drilled in.
    active_filter: Option<Filter>,

    /// Values of `active_filter` with their checkbox state.
    display_values: Vec<DisplayValue>,
}

impl FilterSelectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from a deep copy of `committed`.
    ///
    /// Calling it again replaces the previous session entirely, including any
    /// drill-in state.
    pub fn begin_session(&mut self, committed: &SelectionMap) {
        tracing::debug!(
            filters = committed.len(),
            selected = committed.total_selected(),
            replaced_session = self.staged.is_some(),
            "beginning selection session"
        );

        self.staged = Some(committed.clone());
        self.clear_active_filter();
    }

    /// Drills into `filter` and projects its values against the staged entry.
    ///
    /// The projection follows `filter.values` order. A filter without staged
    /// entry shows all values unselected.
    pub fn select_active_filter(&mut self, filter: &Filter) {
        let staged = self.staged();
        let display_values: Vec<DisplayValue> = filter
            .values
            .iter()
            .map(|value| DisplayValue::from_value(value, staged.contains(&filter.id, &value.id)))
            .collect();

        tracing::debug!(
            filter_id = %filter.id,
            values = display_values.len(),
            preselected = display_values.iter().filter(|v| v.selected).count(),
            "active filter selected"
        );

        self.display_values = display_values;
        self.active_filter = Some(filter.clone());
    }

    /// Flips the checkbox of one value of the active filter.
    ///
    /// Returns `false` if no listed value has that id.
    pub fn toggle_value(&mut self, value_id: &str) -> bool {
        let Some(value) = self.display_values.iter_mut().find(|v| v.id == value_id) else {
            tracing::debug!(value_id = %value_id, "toggled value is not listed");
            return false;
        };

        value.selected = !value.selected;
        tracing::trace!(value_id = %value_id, selected = value.selected, "value toggled");
        true
    }

    /// Writes the selected ids of `toggled` as the staged entry of the active
    /// filter and returns to the filter list.
    ///
    /// An empty result is still written, which records an explicit "nothing
    /// selected" for that filter. Without an active filter this is a no-op.
    pub fn toggle_commit_active_filter_values(&mut self, toggled: &[DisplayValue]) {
        let Some(filter) = self.active_filter.take() else {
            tracing::debug!("no active filter, ignoring value commit");
            return;
        };

        let selected_ids: Vec<String> = toggled
            .iter()
            .filter(|value| value.selected)
            .map(|value| value.id.clone())
            .collect();

        tracing::debug!(
            filter_id = %filter.id,
            selected = selected_ids.len(),
            "staging filter values"
        );

        self.staged
            .get_or_insert_with(SelectionMap::new)
            .insert(filter.id, selected_ids);
        self.display_values.clear();
    }

    /// Commits the store's own display values for the active filter.
    pub fn commit_display_values(&mut self) {
        let toggled = std::mem::take(&mut self.display_values);
        self.toggle_commit_active_filter_values(&toggled);
    }

    /// Clears every staged selection. The session stays open.
    pub fn reset(&mut self) {
        tracing::debug!("resetting staged selections");
        self.staged = Some(SelectionMap::new());
    }

    /// Ends the session and hands the staged selection to the caller.
    ///
    /// The store keeps nothing, so a later [`begin_session`](Self::begin_session)
    /// cannot touch the returned value.
    pub fn commit(&mut self) -> SelectionMap {
        self.clear_active_filter();
        let committed = self.staged.take().unwrap_or_default();

        tracing::debug!(
            filters = committed.len(),
            selected = committed.total_selected(),
            "selection session committed"
        );

        committed
    }

    /// Ends the session without committing.
    pub fn discard(&mut self) {
        if self.staged.is_some() {
            tracing::debug!("discarding staged selections");
        }
        self.staged = None;
        self.clear_active_filter();
    }

    /// True while a session is running.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.staged.is_some()
    }

    /// The staged selection; reads as empty outside of a session.
    #[must_use]
    pub fn staged(&self) -> &SelectionMap {
        static EMPTY: SelectionMap = SelectionMap::new();
        self.staged.as_ref().unwrap_or(&EMPTY)
    }

    #[must_use]
    pub const fn active_filter(&self) -> Option<&Filter> {
        self.active_filter.as_ref()
    }

    #[must_use]
    pub fn display_values(&self) -> &[DisplayValue] {
        &self.display_values
    }

    /// True if any filter of `selection` has at least one selected value.
    #[must_use]
    pub fn has_any_selection(selection: &SelectionMap) -> bool {
        selection.has_any_selection()
    }

    /// Summarizes the selected values of `filter` for the filter list.
    ///
    /// Returns the names of the selected values joined by `", "`, in the order
    /// of `filter.values`. Falls back to `empty_label` when the filter has no
    /// entry, no values, or no value matches the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchpanel::app::FilterSelectionStore;
    /// use searchpanel::domain::{Filter, FilterValue, SelectionMap};
    ///
    /// let age = Filter::new("age", "Age", vec![
    ///     FilterValue::new("child", "Child"),
    ///     FilterValue::new("teen", "Teen"),
    /// ]);
    /// let selection: SelectionMap = [("age", vec!["teen", "child"])].into_iter().collect();
    ///
    /// assert_eq!(FilterSelectionStore::describe_selection(&age, &selection, "None"), "Child, Teen");
    /// assert_eq!(FilterSelectionStore::describe_selection(&age, &SelectionMap::new(), "None"), "None");
    /// ```
    #[must_use]
    pub fn describe_selection(filter: &Filter, selection: &SelectionMap, empty_label: &str) -> String {
        let Some(selected_ids) = selection.entry_for(&filter.id) else {
            return empty_label.to_string();
        };
        if filter.values.is_empty() {
            return empty_label.to_string();
        }

        let names: Vec<&str> = filter
            .values
            .iter()
            .filter(|value| selected_ids.contains(&value.id))
            .map(|value| value.name.as_str())
            .collect();

        if names.is_empty() {
            empty_label.to_string()
        } else {
            names.join(", ")
        }
    }

    fn clear_active_filter(&mut self) {
        self.active_filter = None;
        self.display_values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterValue;

    fn age_filter() -> Filter {
        Filter::new(
            "age",
            "Age",
            vec![FilterValue::new("child", "Child"), FilterValue::new("teen", "Teen")],
        )
    }

    fn selection(entries: &[(&str, Vec<&str>)]) -> SelectionMap {
        entries.iter().map(|(k, ids)| (*k, ids.iter().copied())).collect()
    }

    fn selected_ids(values: &[DisplayValue]) -> Vec<&str> {
        values.iter().filter(|v| v.selected).map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn begin_then_commit_round_trips() {
        let committed = selection(&[("age", vec!["child"]), ("size", vec![])]);
        let mut store = FilterSelectionStore::new();

        store.begin_session(&committed);
        let mut returned = store.commit();

        assert_eq!(returned, committed);
        returned.insert("age", vec!["teen".to_string()]);
        assert!(!store.has_session());
        assert_eq!(committed.selected_ids("age"), ["child"]);
    }

    #[test]
    fn staged_edits_do_not_leak_into_committed() {
        let committed = selection(&[("age", vec!["child"])]);
        let mut store = FilterSelectionStore::new();
        store.begin_session(&committed);

        store.select_active_filter(&age_filter());
        store.toggle_value("teen");
        store.commit_display_values();

        assert_eq!(store.staged().selected_ids("age"), ["child", "teen"]);
        assert_eq!(committed.selected_ids("age"), ["child"]);
    }

    #[test]
    fn projection_marks_staged_values() {
        let mut store = FilterSelectionStore::new();
        store.begin_session(&selection(&[("age", vec!["teen"])]));

        store.select_active_filter(&age_filter());

        let ids: Vec<&str> = store.display_values().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["child", "teen"]);
        assert_eq!(selected_ids(store.display_values()), ["teen"]);
        assert_eq!(store.active_filter().map(|f| f.id.as_str()), Some("age"));
    }

    #[test]
    fn projection_without_entry_is_all_unselected() {
        let mut store = FilterSelectionStore::new();
        store.begin_session(&SelectionMap::new());

        store.select_active_filter(&age_filter());

        assert!(selected_ids(store.display_values()).is_empty());
        assert_eq!(store.display_values().len(), 2);
    }

    #[test]
    fn toggle_commit_round_trips_through_projection() {
        let mut store = FilterSelectionStore::new();
        store.begin_session(&SelectionMap::new());
        let filter = age_filter();

        store.select_active_filter(&filter);
        let toggled = vec![
            DisplayValue::from_value(&filter.values[0], false),
            DisplayValue::from_value(&filter.values[1], true),
        ];
        store.toggle_commit_active_filter_values(&toggled);
        assert!(store.active_filter().is_none());

        store.select_active_filter(&filter);
        assert_eq!(selected_ids(store.display_values()), ["teen"]);
    }

    #[test]
    fn toggle_commit_writes_explicit_empty_entry() {
        let mut store = FilterSelectionStore::new();
        store.begin_session(&selection(&[("age", vec!["child"])]));
        store.select_active_filter(&age_filter());

        store.toggle_value("child");
        store.commit_display_values();

        assert_eq!(store.staged().entry_for("age"), Some(&[][..]));
    }

    #[test]
    fn toggle_commit_without_active_filter_is_noop() {
        let committed = selection(&[("age", vec!["child"])]);
        let mut store = FilterSelectionStore::new();
        store.begin_session(&committed);

        store.toggle_commit_active_filter_values(&[]);

        assert_eq!(store.staged(), &committed);
    }

    #[test]
    fn toggle_unknown_value_reports_false() {
        let mut store = FilterSelectionStore::new();
        store.begin_session(&SelectionMap::new());
        store.select_active_filter(&age_filter());

        assert!(!store.toggle_value("adult"));
        assert!(store.toggle_value("child"));
    }

    #[test]
    fn reset_then_commit_yields_empty() {
        let mut store = FilterSelectionStore::new();
        store.begin_session(&selection(&[("age", vec!["child", "teen"])]));

        store.reset();

        assert!(store.has_session());
        assert_eq!(store.commit(), SelectionMap::new());
    }

    #[test]
    fn begin_session_replaces_previous_session() {
        let mut store = FilterSelectionStore::new();
        store.begin_session(&selection(&[("age", vec!["child"])]));
        store.select_active_filter(&age_filter());

        store.begin_session(&selection(&[("size", vec!["s"])]));

        assert!(store.active_filter().is_none());
        assert!(store.staged().entry_for("age").is_none());
        assert_eq!(store.staged().selected_ids("size"), ["s"]);
    }

    #[test]
    fn discard_drops_session() {
        let mut store = FilterSelectionStore::new();
        store.begin_session(&selection(&[("age", vec!["child"])]));

        store.discard();

        assert!(!store.has_session());
        assert!(store.staged().is_empty());
    }

    #[test]
    fn describe_selection_scenarios() {
        let filter = age_filter();

        assert_eq!(
            FilterSelectionStore::describe_selection(&filter, &SelectionMap::new(), "No filters yet"),
            "No filters yet"
        );
        assert_eq!(
            FilterSelectionStore::describe_selection(&filter, &selection(&[("age", vec!["child"])]), "No filters yet"),
            "Child"
        );
        assert_eq!(
            FilterSelectionStore::describe_selection(&filter, &selection(&[("age", vec!["adult"])]), "No filters yet"),
            "No filters yet"
        );

        let no_values = Filter::new("age", "Age", vec![]);
        assert_eq!(
            FilterSelectionStore::describe_selection(&no_values, &selection(&[("age", vec!["child"])]), "-"),
            "-"
        );
    }

    #[test]
    fn has_any_selection_delegates_to_map() {
        assert!(!FilterSelectionStore::has_any_selection(&selection(&[("age", vec![])])));
        assert!(FilterSelectionStore::has_any_selection(&selection(&[("age", vec![]), ("size", vec!["s"])])));
    }
}
