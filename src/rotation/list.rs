// SPDX-License-Identifier: MPL-2.0
//! Non-empty, immutable list of strings a rotator cycles through.

use crate::error::{Error, Result};

/// Ordered list of rotation entries.
///
/// This newtype enforces non-emptiness at construction, so every index
/// produced by [`RotationList::next_index`] refers to a real entry.
///
/// # Example
///
/// ```
/// use coming_soon::rotation::RotationList;
///
/// let list = RotationList::new(["one", "two"]).unwrap();
/// assert_eq!(list.next_index(1), 0);
/// assert!(RotationList::new(Vec::<String>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationList(Vec<String>);

impl RotationList {
    /// Builds a list, rejecting an empty sequence with `InvalidConfiguration`.
    pub fn new<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(Error::InvalidConfiguration(
                "rotation list must contain at least one entry".to_string(),
            ));
        }
        Ok(Self(items))
    }

    /// Returns the entry at `index`, wrapping around the end of the list.
    #[must_use]
    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    /// Index following `index`, wrapping to 0 after the last entry.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.0.len()
    }
}
