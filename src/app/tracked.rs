//! Observable values with first-assignment suppression.
//!
//! A bound property such as the query text is written by the host several times
//! over its lifetime. The very first write only initializes the value; every
//! later write that actually changes it is a transition the owner reacts to.
//! [`Tracked`] keeps that "has this been initialized" flag next to the value.

/// Outcome of writing a [`Tracked`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// First assignment; the previous value was never set.
    Initialized,
    /// A previous value existed and differs from the new one.
    Changed,
    /// A previous value existed and equals the new one.
    Unchanged,
}

impl Transition {
    /// True only for writes the owner must react to.
    #[must_use]
    pub const fn is_change(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// A value plus a flag recording whether it has ever been assigned.
///
/// Reads before the first assignment return `T::default()`.
///
/// # Examples
///
/// ```
/// use searchpanel::app::tracked::{Tracked, Transition};
///
/// let mut query: Tracked<String> = Tracked::default();
/// assert_eq!(query.set("shoes".to_string()), Transition::Initialized);
/// assert_eq!(query.set("shoes".to_string()), Transition::Unchanged);
/// assert_eq!(query.set("boots".to_string()), Transition::Changed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracked<T> {
    value: T,
    initialized: bool,
}

impl<T: PartialEq> Tracked<T> {
    /// Stores `value` and reports which kind of transition happened.
    pub fn set(&mut self, value: T) -> Transition {
        if !self.initialized {
            self.value = value;
            self.initialized = true;
            return Transition::Initialized;
        }

        if self.value == value {
            Transition::Unchanged
        } else {
            self.value = value;
            Transition::Changed
        }
    }
}

impl<T> Tracked<T> {
    /// A value that counts as already assigned, so its first write is a
    /// regular transition.
    #[must_use]
    pub const fn initialized(value: T) -> Self {
        Self {
            value,
            initialized: true,
        }
    }

    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }
}
