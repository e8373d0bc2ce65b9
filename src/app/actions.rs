//! Actions representing notifications and side effects for the host.
//!
//! This module defines the [`Action`] type, produced by the event handler after
//! processing user input or host property updates. Actions are the only way the
//! panel talks back to the host: reload requests, the filter dialog's `save`
//! signal, the search submission and the dialog surface plumbing.
//!
//! # Example
//!
//! ```rust
//! use searchpanel::app::{Action, RequestParams};
//! use searchpanel::domain::SelectionMap;
//!
//! let action = Action::ChangeRequestParams(RequestParams {
//!     query: "shoes".to_string(),
//!     selected_filters: SelectionMap::new(),
//!     count: 20,
//! });
//! assert!(action.is_reload());
//! ```

use super::modes::MountTicket;
use crate::domain::SelectionMap;
use serde::{Deserialize, Serialize};

/// Snapshot of everything the host loader needs to fetch items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams {
    /// Current query text.
    pub query: String,
    /// Committed filter selections.
    pub selected_filters: SelectionMap,
    /// Number of items to load.
    pub count: usize,
}

/// Commands and notifications to be handled by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Query, committed filters or page size changed.
    ///
    /// The host must refetch items with these parameters.
    ChangeRequestParams(RequestParams),

    /// The user submitted the query text.
    Search {
        /// Query at submission time.
        query: String,
    },

    /// The filter dialog's Apply completed.
    Save {
        /// The newly committed selections.
        selected_filters: SelectionMap,
    },

    /// Move the dialog surface to the top-level layer.
    ///
    /// The host answers with `Event::DialogMounted` carrying the same ticket
    /// once the surface is mounted.
    MountDialog(MountTicket),

    /// Remove the dialog surface from the top-level layer.
    DetachDialog,
}

impl Action {
    /// True if the host has to reload items.
    #[must_use]
    pub const fn is_reload(&self) -> bool {
        matches!(self, Self::ChangeRequestParams(_))
    }
}
