//! Style composition: building styles from pairs and merging them.

mod merge;
mod objectify;

pub use merge::merge;
pub use objectify::{multi, objectify, Keys};
