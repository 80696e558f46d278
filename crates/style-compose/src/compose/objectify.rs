//! Building styles from `(key, value)` pairs.

use crate::style::{Node, Style};

/// The key position of an [`objectify`] pair: one key, or several keys
/// that all receive the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keys {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for Keys {
    fn from(key: &str) -> Self {
        Keys::One(key.to_string())
    }
}

impl From<String> for Keys {
    fn from(key: String) -> Self {
        Keys::One(key)
    }
}

impl From<Vec<String>> for Keys {
    fn from(keys: Vec<String>) -> Self {
        Keys::Many(keys)
    }
}

impl From<Vec<&str>> for Keys {
    fn from(keys: Vec<&str>) -> Self {
        Keys::Many(keys.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Keys {
    fn from(keys: &[&str]) -> Self {
        Keys::Many(keys.iter().map(|k| k.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Keys {
    fn from(keys: [&str; N]) -> Self {
        Keys::Many(keys.iter().map(|k| k.to_string()).collect())
    }
}

/// Turns a list of `(key, value)` pairs into a style.
///
/// A pair whose key is a list assigns the value under every key in the
/// list. Values are stored verbatim, never merged: a later pair with a
/// duplicate key overwrites the earlier one in place.
///
/// # Example
///
/// ```rust
/// use style_compose::{objectify, Keys, Node, Style};
///
/// let style = objectify([
///     (Keys::from("padding"), Node::from(10)),
///     (Keys::from(vec![".a", ".b"]), Style::new().set("margin", 10).into()),
/// ]);
///
/// assert_eq!(style.get(".a"), style.get(".b"));
/// ```
pub fn objectify<I, K, V>(pairs: I) -> Style
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Keys>,
    V: Into<Node>,
{
    let mut style = Style::new();

    for (keys, value) in pairs {
        let value = value.into();
        match keys.into() {
            Keys::One(key) => {
                style.insert(key, value);
            }
            Keys::Many(keys) => {
                for key in keys {
                    style.insert(key, value.clone());
                }
            }
        }
    }

    style
}

/// Repeats the same style for multiple selectors.
///
/// ```rust
/// use style_compose::{multi, Style};
///
/// let style = multi(["&:hover", "&:focus"], Style::new().set("color", "red"));
/// assert_eq!(style.len(), 2);
/// ```
pub fn multi<I, S>(selectors: I, style: Style) -> Style
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    selectors
        .into_iter()
        .map(|selector| (selector, style.clone()))
        .collect()
}
