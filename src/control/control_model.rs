use std::fmt;

use serde::{Deserialize, Serialize};

/// How a control's value can be read and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// Read/write a string value (text, hidden, url, email, tel, select, ...)
    TextLike,

    /// Read/write a boolean checked state only
    Checkbox,

    /// radio, button, file, submit, image: never read or written
    Unsupported,
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ControlKind::TextLike => "text-like",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Unsupported => "unsupported",
        };
        f.write_str(s)
    }
}

/// Which side of a transfer a control or scope was resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Source,
    Destination,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Source => f.write_str("source"),
            Role::Destination => f.write_str("destination"),
        }
    }
}

/// Static attributes of a control, as reported by the element provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    pub name: String,
    pub tag: String,
    pub input_type: Option<String>,
}

impl ControlDescriptor {
    pub fn new(name: &str, tag: &str, input_type: Option<&str>) -> Self {
        ControlDescriptor {
            name: name.to_string(),
            tag: tag.to_string(),
            input_type: input_type.map(str::to_string),
        }
    }

    /// The type label used in diagnostics: the `type` attribute when present,
    /// otherwise the tag name.
    pub fn type_label(&self) -> String {
        self.input_type
            .as_deref()
            .unwrap_or(self.tag.as_str())
            .to_ascii_lowercase()
    }
}
