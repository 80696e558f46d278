//! Style sheet registration.
//!
//! This module turns a [`StyleSheet`] and its [`RegistrationOptions`] into
//! calls against a [`Registry`], producing a [`Registration`] that maps
//! logical names to generated identifiers:
//!
//! - [`StyleValue`]: a literal style or a deferred style computed from [`Refs`]
//! - [`StyleSheet`]: named entries, registered as classes
//! - [`RegistrationOptions`]: keyframes, hash rules, rules, global CSS and [`Mode`]
//! - [`SheetDocument`]: the same description loaded from YAML or JSON
//! - [`SheetError`]: lookup and registration failures

mod document;
mod error;
mod options;
mod registration;
mod registry;
mod value;

pub use document::{HashRuleDocument, RuleDocument, SheetDocument};
pub use error::SheetError;
pub use options::{HashRule, Mode, RegistrationOptions};
pub use registration::{register_style_sheet, IdentifierMap, Refs, Registration};
pub use registry::{Category, Registry};
pub use value::{DeferredStyle, StyleSheet, StyleValue};
