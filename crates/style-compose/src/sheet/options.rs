//! Registration options.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// When sheet entries are computed and registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Register every entry during the registration call, in order.
    #[default]
    Eager,
    /// Register an entry the first time its identifier is read.
    Lazy,
}

/// A style registered under an explicit at-rule prefix instead of a
/// generated class.
#[derive(Debug, Clone)]
pub struct HashRule {
    pub prefix: String,
    pub value: StyleValue,
}

/// Companion collections and switches for one registration call.
///
/// # Example
///
/// ```rust
/// use style_compose::{RegistrationOptions, Style};
///
/// let options = RegistrationOptions::new()
///     .lazy()
///     .keyframes("fade", Style::new()
///         .set("from", Style::new().set("opacity", 0))
///         .set("to", Style::new().set("opacity", 1)))
///     .hash_rule("brand", "@font-face", Style::new().set("font-family", "Brand"))
///     .rule("body", Style::new().set("margin", 0))
///     .css(Style::new().set("html", Style::new().set("box-sizing", "border-box")));
///
/// assert!(options.is_lazy());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistrationOptions {
    pub(crate) mode: Mode,
    pub(crate) keyframes: IndexMap<String, StyleValue>,
    pub(crate) hash_rules: IndexMap<String, HashRule>,
    pub(crate) rules: Vec<(String, StyleValue)>,
    pub(crate) css: Option<StyleValue>,
}

impl RegistrationOptions {
    /// Creates eager options with no companion collections.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Switches to [`Mode::Lazy`].
    pub fn lazy(self) -> Self {
        self.mode(Mode::Lazy)
    }

    pub fn is_lazy(&self) -> bool {
        self.mode == Mode::Lazy
    }

    /// Adds a named keyframes animation.
    ///
    /// Keyframes register before every other category and their names are
    /// never scoped.
    pub fn keyframes<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.keyframes.insert(name.to_string(), value.into());
        self
    }

    /// Adds a named style registered under `prefix`.
    pub fn hash_rule<V: Into<StyleValue>>(mut self, name: &str, prefix: &str, value: V) -> Self {
        self.hash_rules.insert(
            name.to_string(),
            HashRule {
                prefix: prefix.to_string(),
                value: value.into(),
            },
        );
        self
    }

    /// Appends a free-standing rule for `selector`.
    pub fn rule<V: Into<StyleValue>>(mut self, selector: &str, value: V) -> Self {
        self.rules.push((selector.to_string(), value.into()));
        self
    }

    /// Sets the global CSS block, replacing any previous one.
    pub fn css<V: Into<StyleValue>>(mut self, value: V) -> Self {
        self.css = Some(value.into());
        self
    }

    pub fn keyframe_names(&self) -> impl Iterator<Item = &str> {
        self.keyframes.keys().map(String::as_str)
    }

    pub fn hash_rule_names(&self) -> impl Iterator<Item = &str> {
        self.hash_rules.keys().map(String::as_str)
    }

    pub fn rule_selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(selector, _)| selector.as_str())
    }

    pub fn has_css(&self) -> bool {
        self.css.is_some()
    }
}
