//! Style trees.
//!
//! This module provides the data model every other part of the crate
//! operates on:
//!
//! - [`Style`]: an ordered mapping of keys to nodes
//! - [`Node`]: either a [`Leaf`] declaration value or a nested [`Style`]
//! - [`Scalar`]: a single string, number, boolean or null
//! - [`StyleError`]: errors from building styles out of untyped input
//!
//! Nested blocks are told apart from declarations by their node variant,
//! never by inspecting the key.

mod error;
mod json;
mod tree;
mod value;

pub use error::StyleError;
pub use tree::Style;
pub use value::{Leaf, Node, Scalar};
