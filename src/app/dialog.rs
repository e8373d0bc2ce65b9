//! Filter dialog lifecycle and drill-in coordination.
//!
//! [`FilterDialogController`] drives the [`DialogMode`] state machine and
//! forwards user intents to its [`FilterSelectionStore`]. It only ever reads the
//! committed selection (to start a session); the committed copy is replaced by
//! the owner of the controller with the value returned from [`apply`].
//!
//! Transitions requested from a state that does not allow them are ignored and
//! reported as `false`, matching buttons that are not on screen in that state.
//!
//! [`apply`]: FilterDialogController::apply

use super::modes::{DialogMode, MountTicket};
use super::store::FilterSelectionStore;
use super::surface::DialogSurface;
use crate::domain::{DisplayValue, Filter, Result, SelectionMap};

/// Drives the open/drill-in/apply lifecycle of the filter dialog.
#[derive(Debug, Clone)]
pub struct FilterDialogController {
    mode: DialogMode,
    store: FilterSelectionStore,
    next_ticket: u64,
}

impl Default for FilterDialogController {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterDialogController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: DialogMode::Closed,
            store: FilterSelectionStore::new(),
            next_ticket: 0,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> DialogMode {
        self.mode
    }

    #[must_use]
    pub const fn store(&self) -> &FilterSelectionStore {
        &self.store
    }

    #[must_use]
    pub const fn active_filter(&self) -> Option<&Filter> {
        self.store.active_filter()
    }

    #[must_use]
    pub fn display_values(&self) -> &[DisplayValue] {
        self.store.display_values()
    }

    #[must_use]
    pub fn staged(&self) -> &SelectionMap {
        self.store.staged()
    }

    /// Requests the dialog to be shown and returns the ticket of the mount.
    ///
    /// Nothing is staged yet. A second call before the first mount is confirmed
    /// supersedes it: only the newest ticket starts a session.
    pub fn open(&mut self) -> MountTicket {
        self.next_ticket += 1;
        let ticket = MountTicket(self.next_ticket);

        if let DialogMode::Mounting(previous) = self.mode {
            tracing::debug!(
                previous = previous.id(),
                ticket = ticket.id(),
                "superseding pending dialog mount"
            );
        } else {
            tracing::debug!(ticket = ticket.id(), from = ?self.mode, "opening filter dialog");
        }

        self.mode = DialogMode::Mounting(ticket);
        ticket
    }

    /// Starts the selection session once the host confirmed the mount.
    ///
    /// Returns `false` for a ticket that was superseded or cancelled.
    pub fn confirm_mount(&mut self, ticket: MountTicket, committed: &SelectionMap) -> bool {
        if self.mode != DialogMode::Mounting(ticket) {
            tracing::debug!(ticket = ticket.id(), mode = ?self.mode, "ignoring stale dialog mount");
            return false;
        }

        self.store.begin_session(committed);
        self.mode = DialogMode::FilterList;
        tracing::debug!(ticket = ticket.id(), "filter dialog mounted");
        true
    }

    /// Opens the dialog on `surface` and starts the session after it mounted.
    ///
    /// Returns `Ok(false)` when the mount was superseded while pending.
    ///
    /// # Errors
    ///
    /// Propagates the surface's mount error; the dialog is closed in that case.
    pub async fn open_with<S>(&mut self, surface: &mut S, committed: &SelectionMap) -> Result<bool>
    where
        S: DialogSurface + ?Sized,
    {
        let ticket = self.open();

        if let Err(e) = surface.attach().await {
            tracing::warn!(ticket = ticket.id(), error = %e, "dialog surface failed to mount");
            self.close();
            return Err(e);
        }

        Ok(self.confirm_mount(ticket, committed))
    }

    /// Drills into `filter`.
    pub fn select_filter(&mut self, filter: &Filter) -> bool {
        if self.mode != DialogMode::FilterList {
            tracing::debug!(filter_id = %filter.id, mode = ?self.mode, "ignoring filter tap");
            return false;
        }

        self.store.select_active_filter(filter);
        self.mode = DialogMode::ValueList;
        true
    }

    /// Flips one value of the active filter.
    pub fn toggle_value(&mut self, value_id: &str) -> bool {
        if self.mode != DialogMode::ValueList {
            tracing::debug!(value_id = %value_id, mode = ?self.mode, "ignoring value toggle");
            return false;
        }

        self.store.toggle_value(value_id)
    }

    /// Stages the toggled values of the active filter and returns to the list.
    pub fn confirm_values(&mut self) -> bool {
        if self.mode != DialogMode::ValueList {
            tracing::debug!(mode = ?self.mode, "ignoring value confirmation");
            return false;
        }

        self.store.commit_display_values();
        self.mode = DialogMode::FilterList;
        true
    }

    /// Like [`confirm_values`](Self::confirm_values), with the checkbox states
    /// supplied by the caller in bulk.
    pub fn confirm_values_with(&mut self, toggled: &[DisplayValue]) -> bool {
        if self.mode != DialogMode::ValueList {
            tracing::debug!(mode = ?self.mode, "ignoring bulk value confirmation");
            return false;
        }

        self.store.toggle_commit_active_filter_values(toggled);
        self.mode = DialogMode::FilterList;
        true
    }

    /// Clears the staged selections while keeping the dialog open.
    pub fn reset(&mut self) -> bool {
        if self.mode != DialogMode::FilterList {
            tracing::debug!(mode = ?self.mode, "ignoring reset");
            return false;
        }

        self.store.reset();
        true
    }

    /// Closes the dialog and hands out the staged selection.
    ///
    /// Returns `None` unless the filter list is shown.
    pub fn apply(&mut self) -> Option<SelectionMap> {
        if self.mode != DialogMode::FilterList {
            tracing::debug!(mode = ?self.mode, "ignoring apply");
            return None;
        }

        let committed = self.store.commit();
        self.mode = DialogMode::Closed;
        tracing::debug!(selected = committed.total_selected(), "filters applied");
        Some(committed)
    }

    /// Closes the dialog from any state, discarding staged edits.
    ///
    /// A pending mount is cancelled. Returns `false` if already closed.
    pub fn close(&mut self) -> bool {
        if self.mode == DialogMode::Closed {
            return false;
        }

        tracing::debug!(mode = ?self.mode, "closing filter dialog without applying");
        self.store.discard();
        self.mode = DialogMode::Closed;
        true
    }
}
