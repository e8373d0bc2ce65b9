//! Domain layer for the search panel.
//!
//! Plain data types shared by the dialog and the panel, independent of any
//! rendering or host integration concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`filter`]: Filters, their values and the display projection
//! - [`selection`]: Selected value ids keyed by filter id
//! - [`labels`]: Localizable texts
//!
//! # Examples
//!
//! ```
//! use searchpanel::domain::{Filter, FilterValue, SelectionMap};
//!
//! let age = Filter::new("age", "Age", vec![FilterValue::new("child", "Child")]);
//! let selection: SelectionMap = [("age", vec!["child"])].into_iter().collect();
//!
//! assert!(selection.contains(&age.id, "child"));
//! ```

pub mod error;
pub mod filter;
pub mod labels;
pub mod selection;

pub use error::{PanelError, Result};
pub use filter::{DisplayValue, Filter, FilterValue};
pub use labels::Labels;
pub use selection::SelectionMap;
