//! Style sheets described in YAML or JSON.
//!
//! A document holds literal styles only; deferred styles have to be added
//! in code to the [`StyleSheet`] and [`RegistrationOptions`] it produces.
//!
//! ```yaml
//! lazy: true
//! keyframes:
//!   fade:
//!     from: { opacity: 0 }
//!     to: { opacity: 1 }
//! hash_rules:
//!   brand:
//!     prefix: "@font-face"
//!     style: { font-family: Brand }
//! styles:
//!   button:
//!     color: red
//!     "&:hover": { color: blue }
//! rules:
//!   - selector: body
//!     style: { margin: 0 }
//! css:
//!   html: { box-sizing: border-box }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::options::{Mode, RegistrationOptions};
use super::value::StyleSheet;
use crate::style::{Style, StyleError};

/// A hash rule entry of a [`SheetDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HashRuleDocument {
    pub prefix: String,
    pub style: Style,
}

/// A free-standing rule of a [`SheetDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDocument {
    pub selector: String,
    pub style: Style,
}

/// A serialized style sheet together with its registration options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetDocument {
    pub lazy: bool,
    pub styles: IndexMap<String, Style>,
    pub keyframes: IndexMap<String, Style>,
    pub hash_rules: IndexMap<String, HashRuleDocument>,
    pub rules: Vec<RuleDocument>,
    pub css: Option<Style>,
}

impl SheetDocument {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Parse`] if the document is not valid YAML or
    /// does not have the document shape.
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        serde_yaml::from_str(source).map_err(|e| StyleError::Parse {
            format: "YAML",
            message: e.to_string(),
        })
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Parse`] on malformed input.
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        serde_json::from_str(source).map_err(|e| StyleError::Parse {
            format: "JSON",
            message: e.to_string(),
        })
    }

    /// Splits the document into a sheet and the options to register it with.
    pub fn into_parts(self) -> (StyleSheet, RegistrationOptions) {
        let mut sheet = StyleSheet::new();
        for (name, style) in self.styles {
            sheet.insert(&name, style);
        }

        let mode = if self.lazy { Mode::Lazy } else { Mode::Eager };
        let mut options = RegistrationOptions::new().mode(mode);
        for (name, style) in self.keyframes {
            options = options.keyframes(&name, style);
        }
        for (name, rule) in self.hash_rules {
            options = options.hash_rule(&name, &rule.prefix, rule.style);
        }
        for rule in self.rules {
            options = options.rule(&rule.selector, rule.style);
        }
        if let Some(css) = self.css {
            options = options.css(css);
        }

        (sheet, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Node, Scalar};

    const YAML: &str = r##"
lazy: true
keyframes:
  fade:
    from: { opacity: 0 }
    to: { opacity: 1 }
hash_rules:
  brand:
    prefix: "@font-face"
    style: { font-family: Brand }
styles:
  button:
    color: red
    padding: 10
    "&:hover": { color: blue }
  link:
    display: [-webkit-flex, flex]
rules:
  - selector: body
    style: { margin: 0 }
css:
  html: { box-sizing: border-box }
"##;

    #[test]
    fn test_from_yaml() {
        let doc = SheetDocument::from_yaml(YAML).unwrap();

        assert!(doc.lazy);
        let names: Vec<&str> = doc.styles.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["button", "link"]);

        let button = &doc.styles["button"];
        assert_eq!(button.get("color"), Some(&Node::from("red")));
        assert_eq!(button.get("padding"), Some(&Node::from(10)));
        assert!(button.get("&:hover").unwrap().is_style());

        let display = doc.styles["link"].get("display").and_then(Node::as_sequence);
        assert_eq!(
            display,
            Some(&[Scalar::from("-webkit-flex"), Scalar::from("flex")][..])
        );

        assert_eq!(doc.hash_rules["brand"].prefix, "@font-face");
        assert_eq!(doc.rules[0].selector, "body");
        assert!(doc.css.unwrap().contains_key("html"));
    }

    #[test]
    fn test_from_json() {
        let doc = SheetDocument::from_json(
            r#"{ "styles": { "button": { "color": "red" } }, "css": { "html": { "margin": 0 } } }"#,
        )
        .unwrap();

        assert!(!doc.lazy);
        assert!(doc.keyframes.is_empty());
        assert!(doc.styles.contains_key("button"));
    }

    #[test]
    fn test_empty_document_is_default() {
        let doc = SheetDocument::from_yaml("{}").unwrap();
        assert_eq!(doc, SheetDocument::default());
    }

    #[test]
    fn test_from_yaml_rejects_non_style_entry() {
        let err = SheetDocument::from_yaml("styles:\n  button: red\n").unwrap_err();
        assert!(matches!(err, StyleError::Parse { format: "YAML", .. }));
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        let err = SheetDocument::from_json(r#"{ "stylez": {} }"#).unwrap_err();
        assert!(err.to_string().contains("stylez"));
    }

    #[test]
    fn test_into_parts() {
        let (sheet, options) = SheetDocument::from_yaml(YAML).unwrap().into_parts();

        assert_eq!(sheet.names().collect::<Vec<_>>(), vec!["button", "link"]);
        assert!(options.is_lazy());
        assert_eq!(options.keyframe_names().collect::<Vec<_>>(), vec!["fade"]);
        assert_eq!(options.hash_rule_names().collect::<Vec<_>>(), vec!["brand"]);
        assert_eq!(options.rule_selectors().collect::<Vec<_>>(), vec!["body"]);
        assert!(options.has_css());
    }
}
