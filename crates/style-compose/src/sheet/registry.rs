//! The style registry collaborator.

use crate::style::Style;

/// The kinds of entries a style sheet registers, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyframes,
    HashRules,
    Styles,
    Rules,
    Css,
}

impl Category {
    /// The fixed order categories are registered in. Deferred styles of a
    /// later category may read identifiers of an earlier one.
    pub const ORDER: [Category; 5] = [
        Category::Keyframes,
        Category::HashRules,
        Category::Styles,
        Category::Rules,
        Category::Css,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Keyframes => "keyframes",
            Category::HashRules => "hash rule",
            Category::Styles => "style",
            Category::Rules => "rule",
            Category::Css => "css",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A store that hashes style bodies, assigns their identifiers and emits
/// the final CSS.
///
/// Registration only ever calls the registry through these methods and
/// never inspects its output beyond the returned identifiers.
///
/// # Sharing
///
/// Methods take `&self`: one registry is typically shared by every sheet of
/// an application, and lazily registered entries call back into it long
/// after [`register_style_sheet`](crate::register_style_sheet) returned.
/// Implementations keep their state behind interior mutability and are
/// responsible for serializing concurrent calls if they are shared across
/// threads.
///
/// # Errors
///
/// Any error returned is propagated to the caller unchanged, wrapped in
/// [`SheetError::Registry`](crate::SheetError::Registry). Nothing is
/// retried and entries registered before the failure keep their
/// identifiers.
pub trait Registry {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Registers a class style and returns its generated class name.
    fn register_style(&self, style: &Style, display_name: Option<&str>) -> Result<String, Self::Error>;

    /// Registers a keyframes animation and returns its generated name.
    fn register_keyframes(&self, style: &Style, display_name: Option<&str>) -> Result<String, Self::Error>;

    /// Registers a style under an explicit at-rule prefix (e.g.
    /// `@font-face`) and returns its generated identifier.
    fn register_hash_rule(
        &self,
        prefix: &str,
        style: &Style,
        display_name: Option<&str>,
    ) -> Result<String, Self::Error>;

    /// Registers a free-standing rule for a raw selector.
    fn register_rule(&self, selector: &str, style: &Style) -> Result<(), Self::Error>;

    /// Registers global, unscoped CSS.
    fn register_css(&self, style: &Style) -> Result<(), Self::Error>;

    /// Returns the CSS emitted so far. Not used during registration.
    fn get_styles(&self) -> String {
        String::new()
    }
}
