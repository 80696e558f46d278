//! Node types of a style tree.

use serde::{Deserialize, Serialize};

use super::tree::Style;

/// A single declaration value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An absent value. Merging it still overwrites whatever came before.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Returns the text content, if this is a text scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` for [`Scalar::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(value) => write!(f, "{}", value),
            // Integral values print without a fractional part, as CSS expects `10` not `10.0`.
            Scalar::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

/// A terminal value in a style tree: one scalar or an ordered list of them.
///
/// Sequences carry fallback values for a single property
/// (e.g. `display: [-webkit-flex, flex]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Leaf {
    Scalar(Scalar),
    Sequence(Vec<Scalar>),
}

/// A value stored under a key of a [`Style`].
///
/// Keys holding a [`Node::Style`] are nested rule blocks (pseudo selectors,
/// media queries, child selectors); keys holding a [`Node::Leaf`] are
/// declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(Leaf),
    Style(Style),
}

impl Node {
    /// Returns `true` if this node is a nested style block.
    pub fn is_style(&self) -> bool {
        matches!(self, Node::Style(_))
    }

    /// Returns the nested style, if any.
    pub fn as_style(&self) -> Option<&Style> {
        match self {
            Node::Style(style) => Some(style),
            Node::Leaf(_) => None,
        }
    }

    /// Returns the scalar value, if this node is a single scalar.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Leaf(Leaf::Scalar(scalar)) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the fallback list, if this node is a sequence.
    pub fn as_sequence(&self) -> Option<&[Scalar]> {
        match self {
            Node::Leaf(Leaf::Sequence(items)) => Some(items),
            _ => None,
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::Number(value as f64)
                }
            }

            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::from(Scalar::from(value))
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, f32, f64);

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Leaf(Leaf::Scalar(value))
    }
}

impl From<Vec<Scalar>> for Node {
    fn from(items: Vec<Scalar>) -> Self {
        Node::Leaf(Leaf::Sequence(items))
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Style> for Node {
    fn from(style: Style) -> Self {
        Node::Style(style)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::from(Scalar::from(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::from(Scalar::from(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::from(Scalar::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display_integral_number() {
        assert_eq!(Scalar::Number(10.0).to_string(), "10");
        assert_eq!(Scalar::Number(-2.0).to_string(), "-2");
    }

    #[test]
    fn test_scalar_display_fractional_number() {
        assert_eq!(Scalar::Number(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_scalar_display_text_and_null() {
        assert_eq!(Scalar::from("red").to_string(), "red");
        assert_eq!(Scalar::Null.to_string(), "");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_node_conversions() {
        assert_eq!(Node::from(10), Node::Leaf(Leaf::Scalar(Scalar::Number(10.0))));
        assert_eq!(
            Node::from("red").as_scalar().and_then(Scalar::as_str),
            Some("red")
        );
        assert!(Node::from(Style::new()).is_style());
        assert!(!Node::from(false).is_style());
    }

    #[test]
    fn test_sequence_is_not_a_style() {
        let node = Node::from(vec![Scalar::from("-webkit-flex"), Scalar::from("flex")]);
        assert!(!node.is_style());
        assert_eq!(node.as_sequence().map(<[Scalar]>::len), Some(2));
    }
}
