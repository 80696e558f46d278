//! Structural conversion from `serde_json` values.

use serde_json::Value;

use super::error::StyleError;
use super::tree::Style;
use super::value::{Node, Scalar};

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn scalar(value: Value, key: &str) -> Result<Scalar, StyleError> {
    match value {
        Value::Null => Ok(Scalar::Null),
        Value::Bool(b) => Ok(Scalar::Bool(b)),
        // Every JSON number is representable as f64, possibly with rounding.
        Value::Number(n) => Ok(Scalar::Number(n.as_f64().unwrap_or_default())),
        Value::String(s) => Ok(Scalar::Text(s)),
        other => Err(StyleError::InvalidSequence {
            key: key.to_string(),
            found: kind(&other),
        }),
    }
}

fn node(value: Value, key: &str) -> Result<Node, StyleError> {
    match value {
        Value::Object(_) => Style::from_json(value).map(Node::Style),
        Value::Array(items) => items
            .into_iter()
            .map(|item| scalar(item, key))
            .collect::<Result<Vec<_>, _>>()
            .map(Node::from),
        other => scalar(other, key).map(Node::from),
    }
}

impl Style {
    /// Builds a style from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotAStyle`] if `value` is not an object, and
    /// [`StyleError::InvalidSequence`] if an array holds objects or arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use style_compose::Style;
    ///
    /// let style = Style::from_json(json!({
    ///     "color": "red",
    ///     "@media print": { "color": "black" }
    /// })).unwrap();
    ///
    /// assert!(style.get("@media print").unwrap().is_style());
    /// ```
    pub fn from_json(value: Value) -> Result<Style, StyleError> {
        let Value::Object(map) = value else {
            return Err(StyleError::NotAStyle { found: kind(&value) });
        };

        let mut style = Style::new();
        for (key, value) in map {
            let node = node(value, &key)?;
            style.insert(key, node);
        }
        Ok(style)
    }
}

impl TryFrom<Value> for Style {
    type Error = StyleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Style::from_json(value)
    }
}
