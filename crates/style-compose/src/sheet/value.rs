//! Sheet entries and the [`StyleSheet`] description.

use std::rc::Rc;

use indexmap::IndexMap;

use super::error::SheetError;
use super::registration::Refs;
use crate::style::Style;

/// Signature of a deferred style: computes a style from the identifiers
/// registered so far.
pub type DeferredStyle = dyn Fn(&Refs<'_>) -> Result<Style, SheetError>;

/// A sheet entry: either a literal style, or a function computing one.
///
/// Deferred styles let one entry embed the generated identifier of another,
/// such as an animation referencing a keyframes name:
///
/// ```rust
/// use style_compose::{Style, StyleValue};
///
/// let spinner = StyleValue::deferred(|refs| {
///     let spin = refs.keyframes("spin")?;
///     Ok(Style::new().set("animation", format!("{} 1s linear infinite", spin)))
/// });
/// assert!(spinner.is_deferred());
/// ```
#[derive(Clone)]
pub enum StyleValue {
    Literal(Style),
    Deferred(Rc<DeferredStyle>),
}

impl StyleValue {
    /// Wraps a function as a deferred style.
    pub fn deferred<F>(compute: F) -> Self
    where
        F: Fn(&Refs<'_>) -> Result<Style, SheetError> + 'static,
    {
        StyleValue::Deferred(Rc::new(compute))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, StyleValue::Deferred(_))
    }

    /// Returns the style of a literal entry.
    pub fn as_literal(&self) -> Option<&Style> {
        match self {
            StyleValue::Literal(style) => Some(style),
            StyleValue::Deferred(_) => None,
        }
    }
}

impl std::fmt::Debug for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::Literal(style) => f.debug_tuple("Literal").field(style).finish(),
            StyleValue::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Literal(style)
    }
}

/// An ordered mapping of logical names to sheet entries.
///
/// Insertion order is the registration order of eager registration.
///
/// # Example
///
/// ```rust
/// use style_compose::{Style, StyleSheet, StyleValue};
///
/// let sheet = StyleSheet::new()
///     .add("button", Style::new().set("color", "red"))
///     .add("link", StyleValue::deferred(|refs| {
///         let button = refs.style("button")?;
///         Ok(Style::new().set(format!(".{} &", button), Style::new().set("color", "inherit")))
///     }));
///
/// let names: Vec<&str> = sheet.names().collect();
/// assert_eq!(names, vec!["button", "link"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    entries: IndexMap<String, StyleValue>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named entry, returning the updated sheet for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert<V: Into<StyleValue>>(&mut self, name: &str, value: V) -> Option<StyleValue> {
        self.entries.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.entries.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
