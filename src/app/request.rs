//! Request parameter ownership and reload detection.
//!
//! [`SearchRequestController`] owns the query text, the page size and the
//! committed filter selection. It is the single writer of the committed
//! selection and the single source of [`Action::ChangeRequestParams`].
//!
//! # Change Detection
//!
//! The first write of the query only initializes it: the host triggers its own
//! initial load, so no reload is requested. The committed selection starts out
//! as an initialized empty map, so the first Apply already reloads. Every write
//! that changes an initialized value resets the page size and requests a reload.

use super::actions::{Action, RequestParams};
use super::tracked::Tracked;
use crate::domain::{Filter, SelectionMap};

/// Number of items requested for the first page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Number of items added by each "more" request.
pub const PAGE_INCREMENT: usize = 20;

/// Owner of the query, the page size and the committed selection.
#[derive(Debug, Clone)]
pub struct SearchRequestController {
    query: Tracked<String>,
    selected_filters: Tracked<SelectionMap>,
    count: usize,
}

impl Default for SearchRequestController {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchRequestController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: Tracked::default(),
            selected_filters: Tracked::initialized(SelectionMap::new()),
            count: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.query.get()
    }

    /// The committed selection; empty until the host or Apply changes it.
    #[must_use]
    pub const fn selected_filters(&self) -> &SelectionMap {
        self.selected_filters.get()
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Current parameters for the host loader.
    #[must_use]
    pub fn request_params(&self) -> RequestParams {
        RequestParams {
            query: self.query().to_string(),
            selected_filters: self.selected_filters().clone(),
            count: self.count,
        }
    }

    /// Writes the query text.
    ///
    /// Returns a reload request if a previous query existed and differs.
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<Action> {
        let query = query.into();
        let transition = self.query.set(query);
        tracing::debug!(query = %self.query(), transition = ?transition, "query written");

        transition.is_change().then(|| self.restart_paging())
    }

    /// Replaces the committed selection wholesale.
    ///
    /// Returns a reload request if the selection differs from the current one,
    /// including the initial empty map. Writing a structurally equal selection,
    /// such as applying the dialog without edits, requests no reload.
    pub fn set_selected_filters(&mut self, selected_filters: SelectionMap) -> Option<Action> {
        let transition = self.selected_filters.set(selected_filters);
        tracing::debug!(
            selected = self.selected_filters().total_selected(),
            transition = ?transition,
            "committed filters written"
        );

        transition.is_change().then(|| self.restart_paging())
    }

    /// Host write of the page size. Never requests a reload.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    /// Grows the page by [`PAGE_INCREMENT`] and requests a reload.
    pub fn load_more(&mut self) -> Action {
        self.count += PAGE_INCREMENT;
        tracing::debug!(count = self.count, "loading more items");
        Action::ChangeRequestParams(self.request_params())
    }

    /// Signals that the user submitted the current query.
    #[must_use]
    pub fn submit_search(&self) -> Action {
        Action::Search {
            query: self.query().to_string(),
        }
    }

    /// Total number of selected values over all filters.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchpanel::app::SearchRequestController;
    /// use searchpanel::domain::SelectionMap;
    ///
    /// let selection: SelectionMap = [("a", vec!["1", "2"]), ("b", vec!["3"])].into_iter().collect();
    /// assert_eq!(SearchRequestController::filter_count(&selection), 3);
    /// assert_eq!(SearchRequestController::filter_count(&SelectionMap::new()), 0);
    /// ```
    #[must_use]
    pub fn filter_count(selected_filters: &SelectionMap) -> usize {
        selected_filters.total_selected()
    }

    /// True if there is nothing to filter by.
    #[must_use]
    pub fn is_filter_button_disabled(filters: Option<&[Filter]>) -> bool {
        filters.map_or(true, <[Filter]>::is_empty)
    }

    /// True if loading finished without any items.
    #[must_use]
    pub const fn should_show_no_results(has_items: bool, loading: bool) -> bool {
        !has_items && !loading
    }

    /// True if items are defined and non-empty.
    #[must_use]
    pub fn has_items<T>(items: Option<&[T]>) -> bool {
        items.is_some_and(|items| !items.is_empty())
    }

    fn restart_paging(&mut self) -> Action {
        self.count = DEFAULT_PAGE_SIZE;
        Action::ChangeRequestParams(self.request_params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reload_count(action: Option<Action>) -> Option<usize> {
        match action {
            Some(Action::ChangeRequestParams(params)) => Some(params.count),
            _ => None,
        }
    }

    #[test]
    fn first_query_does_not_reload() {
        let mut request = SearchRequestController::new();

        assert!(request.set_query("x").is_none());
        assert_eq!(request.query(), "x");
    }

    #[test]
    fn second_query_reloads_and_resets_count() {
        let mut request = SearchRequestController::new();
        request.set_query("x");
        request.load_more();
        assert_eq!(request.count(), 40);

        let action = request.set_query("y");

        assert_eq!(reload_count(action), Some(DEFAULT_PAGE_SIZE));
        assert_eq!(request.count(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn identical_query_does_not_reload() {
        let mut request = SearchRequestController::new();
        request.set_query("x");

        assert!(request.set_query("x").is_none());
    }

    #[test]
    fn first_selection_change_reloads() {
        let mut request = SearchRequestController::new();
        let selection: SelectionMap = [("age", vec!["child"])].into_iter().collect();

        let action = request.set_selected_filters(selection.clone());

        assert!(matches!(action, Some(Action::ChangeRequestParams(params)) if params.selected_filters == selection));
    }

    #[test]
    fn selected_filters_reload_only_on_change() {
        let mut request = SearchRequestController::new();
        let selection: SelectionMap = [("age", vec!["child"])].into_iter().collect();

        assert!(request.set_selected_filters(SelectionMap::new()).is_none());
        request.set_count(60);

        let action = request.set_selected_filters(selection.clone());

        match action {
            Some(Action::ChangeRequestParams(params)) => {
                assert_eq!(params.selected_filters, selection);
                assert_eq!(params.count, DEFAULT_PAGE_SIZE);
            }
            other => panic!("expected reload, got {other:?}"),
        }
        assert!(request.set_selected_filters(selection).is_none());
    }

    #[test]
    fn load_more_increments_without_reset() {
        let mut request = SearchRequestController::new();
        request.set_query("x");

        let first = request.load_more();
        let second = request.load_more();

        assert!(first.is_reload());
        assert_eq!(reload_count(Some(second)), Some(60));
        assert_eq!(request.count(), 60);
    }

    #[test]
    fn set_count_is_silent() {
        let mut request = SearchRequestController::new();
        request.set_count(100);

        assert_eq!(request.count(), 100);
        assert_eq!(request.request_params().count, 100);
    }

    #[test]
    fn submit_search_carries_query() {
        let mut request = SearchRequestController::new();
        request.set_query("boots");

        assert_eq!(
            request.submit_search(),
            Action::Search {
                query: "boots".to_string()
            }
        );
    }

    #[test]
    fn derived_helpers() {
        let filters = vec![Filter::new("age", "Age", vec![])];

        assert!(SearchRequestController::is_filter_button_disabled(None));
        assert!(SearchRequestController::is_filter_button_disabled(Some(&[][..])));
        assert!(!SearchRequestController::is_filter_button_disabled(Some(filters.as_slice())));

        assert!(SearchRequestController::should_show_no_results(false, false));
        assert!(!SearchRequestController::should_show_no_results(false, true));
        assert!(!SearchRequestController::should_show_no_results(true, false));

        assert!(!SearchRequestController::has_items::<u8>(None));
        assert!(!SearchRequestController::has_items::<u8>(Some(&[])));
        assert!(SearchRequestController::has_items::<u8>(Some(&[1])));
    }
}
