//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (which owns rendering, the dialog surface
//! and data loading) and the domain types. It implements the event-driven
//! architecture of the panel.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input / Host Writes → Events → Event Handler → State Mutations → Actions → Host
//!                               ↑                                          ↓
//!                               └──── DialogMounted / loader results ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Notifications and commands for the host
//! - [`dialog`]: Filter dialog lifecycle
//! - [`handler`]: Event processing and state transition coordination
//! - [`modes`]: Dialog state machine types
//! - [`request`]: Query, page size and committed selection ownership
//! - [`state`]: Panel state container and view model computation
//! - [`store`]: Staged selection of one dialog session
//! - [`surface`]: Host seam for mounting the dialog
//! - [`tracked`]: Values with first-assignment suppression
//!
//! # Example
//!
//! ```rust
//! use searchpanel::app::{handle_event, Event, SearchPanel};
//! use searchpanel::domain::Labels;
//!
//! let mut panel = SearchPanel::new(Labels::default());
//! let (_render, actions) = handle_event(&mut panel, &Event::LoadMore)?;
//! assert!(actions[0].is_reload());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod dialog;
pub mod handler;
pub mod modes;
pub mod request;
pub mod state;
pub mod store;
pub mod surface;
pub mod tracked;

pub use actions::{Action, RequestParams};
pub use dialog::FilterDialogController;
pub use handler::{handle_event, Event};
pub use modes::{DialogMode, MountTicket};
pub use request::{SearchRequestController, DEFAULT_PAGE_SIZE, PAGE_INCREMENT};
pub use state::SearchPanel;
pub use store::FilterSelectionStore;
pub use surface::{DialogSurface, TickSurface};
