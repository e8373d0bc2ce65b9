//! Filter selections keyed by filter id.
//!
//! A [`SelectionMap`] maps a filter id to the ordered list of value ids the user
//! picked for it, e.g. `{ "age": ["child", "teen"] }`. A filter that has no entry
//! is treated exactly like a filter with an empty entry by every consumer.
//!
//! The map owns all of its strings, so `clone()` is a deep copy: the staged copy
//! edited inside the dialog can never be observed through the committed copy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from filter id to the selected value ids of that filter.
///
/// Serialized as a plain object so it can be exchanged with the host unchanged.
///
/// # Examples
///
/// ```
/// use searchpanel::domain::SelectionMap;
///
/// let mut selection = SelectionMap::new();
/// selection.insert("age", vec!["child".to_string(), "teen".to_string()]);
///
/// assert!(selection.contains("age", "teen"));
/// assert_eq!(selection.total_selected(), 2);
/// assert_eq!(serde_json::to_string(&selection).unwrap(), r#"{"age":["child","teen"]}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionMap(BTreeMap<String, Vec<String>>);

impl SelectionMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns the entry for `filter_id`, if the filter has ever been written.
    #[must_use]
    pub fn entry_for(&self, filter_id: &str) -> Option<&[String]> {
        self.0.get(filter_id).map(Vec::as_slice)
    }

    /// Returns the selected ids of `filter_id`; an absent entry reads as empty.
    #[must_use]
    pub fn selected_ids(&self, filter_id: &str) -> &[String] {
        self.entry_for(filter_id).unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, filter_id: &str, value_id: &str) -> bool {
        self.selected_ids(filter_id).iter().any(|id| id == value_id)
    }

    /// Replaces the entry of `filter_id`. An empty list is stored as-is.
    pub fn insert(&mut self, filter_id: impl Into<String>, value_ids: Vec<String>) {
        self.0.insert(filter_id.into(), value_ids);
    }

    /// True if at least one filter has at least one selected value.
    #[must_use]
    pub fn has_any_selection(&self) -> bool {
        self.0.values().any(|ids| !ids.is_empty())
    }

    /// Number of selected values summed over all filters.
    #[must_use]
    pub fn total_selected(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Number of filters with an entry, including explicitly empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl From<BTreeMap<String, Vec<String>>> for SelectionMap {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

impl<K, I> FromIterator<(K, I)> for SelectionMap
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, ids)| (k.into(), ids.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}
