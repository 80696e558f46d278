//! Style construction errors.

use thiserror::Error;

/// Error returned when input does not have the shape of a style tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A non-object value was found where a style was required.
    #[error("expected a style object, found {found}")]
    NotAStyle { found: &'static str },

    /// A sequence under `key` holds something other than scalars.
    #[error("sequence under '{key}' may only hold scalars, found {found}")]
    InvalidSequence { key: String, found: &'static str },

    /// A style document could not be parsed.
    #[error("failed to parse {format} style document: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}
