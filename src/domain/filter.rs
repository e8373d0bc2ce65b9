//! Filter domain model.
//!
//! Filters are supplied by the host application and never modified by the panel.
//! Each [`Filter`] carries an ordered list of [`FilterValue`]s the user can pick
//! from. [`DisplayValue`] is the transient, render-only projection of a value with
//! its current checkbox state.

use serde::{Deserialize, Serialize};

/// A single selectable value of a filter, e.g. `{ id: "child", name: "Child" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValue {
    pub id: String,
    pub name: String,
}

impl FilterValue {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A filter the user can drill into, e.g. "Age" with values "Child" and "Teen".
///
/// A filter whose `values` field is missing from the host payload deserializes
/// with an empty value list, so it renders as "no values" instead of failing.
///
/// # Examples
///
/// ```
/// use searchpanel::domain::Filter;
///
/// let filter: Filter = serde_json::from_str(r#"{ "id": "age", "name": "Age" }"#).unwrap();
/// assert!(filter.values.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<FilterValue>,
}

impl Filter {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, values: Vec<FilterValue>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            values,
        }
    }

    /// Looks up a filter by id in a host-supplied list.
    #[must_use]
    pub fn find<'a>(filters: &'a [Self], id: &str) -> Option<&'a Self> {
        filters.iter().find(|filter| filter.id == id)
    }
}

/// A [`FilterValue`] extended with its checkbox state inside the value list.
///
/// Recomputed every time a filter is drilled into; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayValue {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

impl DisplayValue {
    #[must_use]
    pub fn from_value(value: &FilterValue, selected: bool) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            selected,
        }
    }
}
