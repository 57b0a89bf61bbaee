//! Sub-breed list value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Ordered list of sub-breed names for a single breed.
///
/// The list is an immutable shared view: cloning is cheap and never copies
/// the names, and there is no way to mutate it in place. Callers that need a
/// mutable list take an owned copy with [`SubBreeds::to_vec`], which leaves
/// every other holder of the list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SubBreeds(Arc<[String]>);

impl SubBreeds {
    /// An empty list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// View the names as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Deref for SubBreeds {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for SubBreeds {
    fn from(names: Vec<String>) -> Self {
        Self(names.into())
    }
}

impl From<SubBreeds> for Vec<String> {
    fn from(list: SubBreeds) -> Self {
        list.0.to_vec()
    }
}

impl<S: Into<String>> FromIterator<S> for SubBreeds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a SubBreeds {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[&str]> for SubBreeds {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for SubBreeds {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == other.as_slice()
    }
}

impl fmt::Display for SubBreeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
