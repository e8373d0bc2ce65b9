//! User interface layer: view model and plain-text rendering.
//!
//! Hosts with their own widget toolkit consume [`viewmodel::PanelViewModel`]
//! directly. The text renderer backs the line-driven host binary and tests.
//!
//! # Architecture
//!
//! ```text
//! SearchPanel → compute_viewmodel → PanelViewModel → render → io::Write
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Render-ready projection of the panel
//! - [`renderer`]: Plain-text renderer

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use viewmodel::{
    DialogView, FilterButtonInfo, FilterRow, MoreButtonInfo, PanelViewModel, SearchBarInfo,
};
