//! View model types representing renderable panel state.
//!
//! View models are created via `SearchPanel::compute_viewmodel()` and consumed
//! by a renderer. They contain no business logic, only display-ready data: every
//! summary, count and enablement flag is already computed.

use crate::domain::DisplayValue;

/// Complete view model of the search panel and its filter dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelViewModel {
    /// Search input state.
    pub search_bar: SearchBarInfo,

    /// Filter button next to the search input.
    pub filter_button: FilterButtonInfo,

    /// True if the results area should be shown.
    pub show_results: bool,

    /// Number of items of the latest load.
    pub result_count: usize,

    /// Message shown when loading finished without items.
    pub no_results: Option<String>,

    /// Button loading the next page, if more items exist.
    pub more_button: Option<MoreButtonInfo>,

    /// The filter dialog, if open.
    pub dialog: Option<DialogView>,
}

/// Search input display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,
    /// Text shown while the query is empty.
    pub placeholder: String,
    /// Icon in the search background.
    pub icon: String,
}

/// Filter button display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButtonInfo {
    /// Number of committed selected values, shown as a badge.
    pub selected_count: usize,
    /// True if no filters are available.
    pub disabled: bool,
    /// True if the host hides the button.
    pub hidden: bool,
}

/// "More" button display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoreButtonInfo {
    pub label: String,
    /// True while a load is in flight.
    pub busy: bool,
}

/// Content of the open filter dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogView {
    /// Waiting for the host to mount the dialog surface.
    Mounting,

    /// List of all filters with their staged selection summaries.
    FilterList {
        rows: Vec<FilterRow>,
        /// True if any staged filter has a selected value.
        has_selection: bool,
        reset_label: String,
        save_label: String,
    },

    /// Values of the filter being edited.
    ValueList {
        filter_name: String,
        values: Vec<DisplayValue>,
    },
}

/// One filter in the dialog's filter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRow {
    pub id: String,
    pub name: String,
    /// Comma-joined selected value names, or the "no values" label.
    pub summary: String,
}
