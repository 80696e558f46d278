//! Style sheet registration errors.

use thiserror::Error;

use super::registry::Category;

/// Error returned by [`register_style_sheet`](crate::register_style_sheet)
/// and by identifier lookups.
#[derive(Debug, Error)]
pub enum SheetError {
    /// An identifier was read before its entry was registered.
    ///
    /// Only eager registration reports this: its deferred styles can see
    /// entries of earlier categories and earlier entries of their own.
    #[error("{category} '{name}' has not been registered yet")]
    Unavailable { category: Category, name: String },

    /// No entry with this name exists in the sheet or its options.
    #[error("no {category} named '{name}'")]
    UnknownEntry { category: Category, name: String },

    /// A lazy entry was read again while it was still being computed.
    #[error("{category} '{name}' refers to itself while being registered")]
    Cycle { category: Category, name: String },

    /// The registry refused a registration.
    #[error("failed to register {category} '{}': {source}", .name.as_deref().unwrap_or("<global>"))]
    Registry {
        category: Category,
        name: Option<String>,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SheetError {
    pub(crate) fn registry<E>(category: Category, name: Option<&str>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SheetError::Registry {
            category,
            name: name.map(str::to_string),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("disk full")]
    struct DiskFull;

    #[test]
    fn test_unavailable_display() {
        let err = SheetError::Unavailable {
            category: Category::Styles,
            name: "button".to_string(),
        };
        assert_eq!(err.to_string(), "style 'button' has not been registered yet");
    }

    #[test]
    fn test_cycle_display() {
        let err = SheetError::Cycle {
            category: Category::Keyframes,
            name: "fade".to_string(),
        };
        assert!(err.to_string().contains("fade"));
        assert!(err.to_string().contains("itself"));
    }

    #[test]
    fn test_registry_display_with_and_without_name() {
        let named = SheetError::registry(Category::Styles, Some("button"), DiskFull);
        assert_eq!(named.to_string(), "failed to register style 'button': disk full");

        let global = SheetError::registry(Category::Css, None, DiskFull);
        assert_eq!(global.to_string(), "failed to register css '<global>': disk full");
    }

    #[test]
    fn test_registry_source_is_preserved() {
        use std::error::Error as _;

        let err = SheetError::registry(Category::Rules, Some("html"), DiskFull);
        assert_eq!(err.source().map(|e| e.to_string()), Some("disk full".to_string()));
    }
}
