//! # Style Compose - composable style objects for CSS-in-Rust
//!
//! `style-compose` builds nested style descriptions and registers them with
//! a style registry that hashes them into class names and emits CSS.
//!
//! ## Quick Start
//!
//! ```rust
//! use style_compose::{merge, Style};
//!
//! let base = Style::new().set("margin", 5).set("padding", 10);
//! let print = Style::new().set("@media print", Style::new().set("margin", 0));
//!
//! let style = merge([&base, &print]);
//! assert_eq!(style.len(), 3);
//! ```
//!
//! ## Concepts
//!
//! - [`Style`]: an ordered tree of declarations and nested blocks
//! - [`merge`]: recursive, last-wins merging of styles
//! - [`objectify`] and [`multi`]: build styles from selector/value pairs
//! - [`escape`], [`quote`], [`url`]: embed literal strings in declarations
//! - [`register_style_sheet`]: register named styles, keyframes, hash rules,
//!   raw rules and global CSS in a fixed order against a [`Registry`]
//!
//! ## Forward references
//!
//! A sheet entry can be a [`StyleValue::Deferred`] function. It receives
//! [`Refs`] and may embed identifiers generated for other entries, e.g. a
//! keyframes name inside an `animation` declaration. Keyframes register
//! first, then hash rules, then styles, so each category can reference the
//! ones before it.
//!
//! With [`Mode::Lazy`], entries register on first read only, so unused
//! styles never reach the registry. Each entry registers at most once
//! either way.

pub mod compose;
pub mod sheet;
pub mod style;
mod util;

pub use compose::{merge, multi, objectify, Keys};
pub use sheet::{
    register_style_sheet, Category, DeferredStyle, HashRule, HashRuleDocument, IdentifierMap,
    Mode, Refs, Registration, RegistrationOptions, Registry, RuleDocument, SheetDocument,
    SheetError, StyleSheet, StyleValue,
};
pub use style::{Leaf, Node, Scalar, Style, StyleError};
pub use util::{escape, quote, url};
