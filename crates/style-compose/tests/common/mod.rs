//! A recording registry for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use style_compose::{Registry, Style};

/// One call received by [`RecordingRegistry`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Keyframes { name: Option<String>, style: Style },
    HashRule { prefix: String, name: Option<String>, style: Style },
    Style { name: Option<String>, style: Style },
    Rule { selector: String, style: Style },
    Css { style: Style },
}

impl Call {
    pub fn kind(&self) -> &'static str {
        match self {
            Call::Keyframes { .. } => "keyframes",
            Call::HashRule { .. } => "hash_rule",
            Call::Style { .. } => "style",
            Call::Rule { .. } => "rule",
            Call::Css { .. } => "css",
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Call::Keyframes { name, .. } | Call::HashRule { name, .. } | Call::Style { name, .. } => {
                name.as_deref()
            }
            Call::Rule { selector, .. } => Some(selector),
            Call::Css { .. } => None,
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Call::Keyframes { style, .. }
            | Call::HashRule { style, .. }
            | Call::Style { style, .. }
            | Call::Rule { style, .. }
            | Call::Css { style } => style,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("refused to register '{0}'")]
pub struct Refused(pub String);

/// Records every call and hands out identifiers of the form
/// `<display name>-<call index>`.
#[derive(Debug, Default)]
pub struct RecordingRegistry {
    calls: RefCell<Vec<Call>>,
    refuse: Vec<String>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails any registration whose display name (or selector) is `name`.
    pub fn refusing(name: &str) -> Self {
        Self {
            refuse: vec![name.to_string()],
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(Call::kind).collect()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.kind() == kind).count()
    }

    fn record(&self, call: Call) -> Result<String, Refused> {
        if let Some(name) = call.name() {
            if self.refuse.iter().any(|r| r == name) {
                return Err(Refused(name.to_string()));
            }
        }
        let mut calls = self.calls.borrow_mut();
        let id = format!("{}-{}", call.name().unwrap_or("global"), calls.len());
        calls.push(call);
        Ok(id)
    }
}

impl Registry for RecordingRegistry {
    type Error = Refused;

    fn register_style(&self, style: &Style, display_name: Option<&str>) -> Result<String, Refused> {
        self.record(Call::Style {
            name: display_name.map(str::to_string),
            style: style.clone(),
        })
    }

    fn register_keyframes(&self, style: &Style, display_name: Option<&str>) -> Result<String, Refused> {
        self.record(Call::Keyframes {
            name: display_name.map(str::to_string),
            style: style.clone(),
        })
    }

    fn register_hash_rule(
        &self,
        prefix: &str,
        style: &Style,
        display_name: Option<&str>,
    ) -> Result<String, Refused> {
        self.record(Call::HashRule {
            prefix: prefix.to_string(),
            name: display_name.map(str::to_string),
            style: style.clone(),
        })
    }

    fn register_rule(&self, selector: &str, style: &Style) -> Result<(), Refused> {
        self.record(Call::Rule {
            selector: selector.to_string(),
            style: style.clone(),
        })
        .map(|_| ())
    }

    fn register_css(&self, style: &Style) -> Result<(), Refused> {
        self.record(Call::Css { style: style.clone() }).map(|_| ())
    }
}
