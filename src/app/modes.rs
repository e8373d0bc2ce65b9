//! State machine types of the filter dialog.
//!
//! # State Machine
//!
//! ```text
//!            open()                 confirm_mount(ticket)
//! Closed ───────────► Mounting ─────────────────────────► FilterList ◄──┐
//!   ▲                    │  ▲ open() (new ticket)             │   │     │ reset()
//!   │                    └──┘                    select_filter│   └─────┘
//!   │                                                         ▼
//!   │  apply() / close()                                  ValueList
//!   └─────────────────────── any state            confirm_values() ─► FilterList
//! ```
//!
//! # Example
//!
//! ```rust
//! use searchpanel::app::modes::DialogMode;
//!
//! let mode = DialogMode::Closed;
//! assert!(!mode.is_open());
//! ```

/// Identifies one pending mount request.
///
/// Each call to `open()` issues a fresh ticket; only the most recent one can
/// start a selection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountTicket(pub(crate) u64);

impl MountTicket {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Current state of the filter dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// Dialog is not shown; no staged selection exists.
    Closed,

    /// The host is attaching the dialog surface.
    ///
    /// No staged state may be touched until the mount with this ticket is
    /// confirmed.
    Mounting(MountTicket),

    /// Dialog lists all filters with their selection summaries.
    FilterList,

    /// Dialog lists the values of the active filter.
    ValueList,
}

impl DialogMode {
    /// True once the mount was confirmed and until the dialog closes.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::FilterList | Self::ValueList)
    }
}
