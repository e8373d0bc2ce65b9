//! Search panel state and view model computation.
//!
//! This module defines [`SearchPanel`], the state container composing the
//! request controller, the filter dialog and the display-only inputs supplied by
//! the host (`filters`, `items`, `has_more`, `loading`, labels).
//!
//! # State Components
//!
//! - **Request**: query, page size and committed selection ([`SearchRequestController`])
//! - **Dialog**: staged selection and drill-in state ([`FilterDialogController`])
//! - **Filters**: filter definitions the dialog lists
//! - **Results**: the loader's latest `items`, `has_more` and `loading`
//!
//! # Example
//!
//! ```rust
//! use searchpanel::app::SearchPanel;
//! use searchpanel::domain::Labels;
//!
//! let panel = SearchPanel::new(Labels::default());
//! let viewmodel = panel.compute_viewmodel();
//! assert!(viewmodel.filter_button.disabled);
//! ```

use super::dialog::FilterDialogController;
use super::modes::DialogMode;
use super::request::SearchRequestController;
use super::store::FilterSelectionStore;
use crate::domain::{Filter, Labels};
use crate::ui::viewmodel::{
    DialogView, FilterButtonInfo, FilterRow, MoreButtonInfo, PanelViewModel, SearchBarInfo,
};
use serde_json::Value;

/// Central state container of the search panel.
#[derive(Debug, Clone)]
pub struct SearchPanel {
    /// Query, page size and committed selection.
    pub request: SearchRequestController,

    /// Filter dialog with its staged selection.
    pub dialog: FilterDialogController,

    /// Filter definitions supplied by the host.
    pub filters: Option<Vec<Filter>>,

    /// Items of the latest load; opaque to the panel.
    pub items: Option<Vec<Value>>,

    /// True if the loader can deliver more items.
    pub has_more: bool,

    /// True while the loader is fetching items.
    pub loading: bool,

    /// Hides the filter button entirely.
    pub hide_filter_button: bool,

    /// Localizable texts.
    pub labels: Labels,
}

impl SearchPanel {
    #[must_use]
    pub fn new(labels: Labels) -> Self {
        Self {
            request: SearchRequestController::new(),
            dialog: FilterDialogController::new(),
            filters: None,
            items: None,
            has_more: false,
            loading: false,
            hide_filter_button: false,
            labels,
        }
    }

    #[must_use]
    pub fn filters(&self) -> Option<&[Filter]> {
        self.filters.as_deref()
    }

    #[must_use]
    pub fn find_filter(&self, filter_id: &str) -> Option<&Filter> {
        self.filters().and_then(|filters| Filter::find(filters, filter_id))
    }

    #[must_use]
    pub fn has_items(&self) -> bool {
        SearchRequestController::has_items(self.items.as_deref())
    }

    #[must_use]
    pub fn is_filter_button_disabled(&self) -> bool {
        SearchRequestController::is_filter_button_disabled(self.filters())
    }

    /// Computes the render-ready projection of the panel.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PanelViewModel {
        let has_items = self.has_items();

        let no_results = SearchRequestController::should_show_no_results(has_items, self.loading)
            .then(|| self.labels.no_results_text.clone());

        let more_button = self.has_more.then(|| MoreButtonInfo {
            label: self.labels.more_button.clone(),
            busy: self.loading,
        });

        PanelViewModel {
            search_bar: SearchBarInfo {
                query: self.request.query().to_string(),
                placeholder: self.labels.placeholder.clone(),
                icon: self.labels.icon.clone(),
            },
            filter_button: FilterButtonInfo {
                selected_count: SearchRequestController::filter_count(self.request.selected_filters()),
                disabled: self.is_filter_button_disabled(),
                hidden: self.hide_filter_button,
            },
            show_results: has_items,
            result_count: self.items.as_ref().map_or(0, Vec::len),
            no_results,
            more_button,
            dialog: self.compute_dialog_view(),
        }
    }

    fn compute_dialog_view(&self) -> Option<DialogView> {
        match self.dialog.mode() {
            DialogMode::Closed => None,
            DialogMode::Mounting(_) => Some(DialogView::Mounting),
            DialogMode::FilterList => {
                let staged = self.dialog.staged();
                let rows = self
                    .filters()
                    .unwrap_or_default()
                    .iter()
                    .map(|filter| FilterRow {
                        id: filter.id.clone(),
                        name: filter.name.clone(),
                        summary: FilterSelectionStore::describe_selection(
                            filter,
                            staged,
                            &self.labels.no_values_label,
                        ),
                    })
                    .collect();

                Some(DialogView::FilterList {
                    rows,
                    has_selection: FilterSelectionStore::has_any_selection(staged),
                    reset_label: self.labels.reset_button.clone(),
                    save_label: self.labels.save_button.clone(),
                })
            }
            DialogMode::ValueList => Some(DialogView::ValueList {
                filter_name: self
                    .dialog
                    .active_filter()
                    .map(|filter| filter.name.clone())
                    .unwrap_or_default(),
                values: self.dialog.display_values().to_vec(),
            }),
        }
    }
}
