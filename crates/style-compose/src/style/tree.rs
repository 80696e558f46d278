//! The [`Style`] mapping.

use indexmap::map::{Iter, Keys};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::Node;

/// An ordered mapping from selector or property keys to [`Node`]s.
///
/// Keys keep their first insertion position; writing an existing key
/// replaces its value in place. A `Style` is always a finite tree since
/// nodes own their children.
///
/// # Example
///
/// ```rust
/// use style_compose::Style;
///
/// let button = Style::new()
///     .set("color", "red")
///     .set("padding", 10)
///     .set("&:hover", Style::new().set("color", "blue"));
///
/// assert_eq!(button.len(), 3);
/// assert!(button.get("&:hover").unwrap().is_style());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    entries: IndexMap<String, Node>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, returning the updated style for chaining.
    pub fn set<K: Into<String>, V: Into<Node>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a key, returning the value it replaced.
    pub fn insert<K: Into<String>, V: Into<Node>>(&mut self, key: K, value: V) -> Option<Node> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries.get_mut(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> Keys<'_, String, Node> {
        self.entries.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, Node> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Style {
    type Item = (&'a String, &'a Node);
    type IntoIter = Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Style {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (key, value) in iter {
            style.insert(key, value);
        }
        style
    }
}
