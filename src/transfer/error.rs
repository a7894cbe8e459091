use thiserror::Error;

use crate::control::control_model::{ControlKind, Role};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// Scope lookup did not yield exactly one container
    #[error("{role} scope must resolve to exactly one container, found {found}")]
    ScopeCardinality { role: Role, found: usize },

    /// Named lookup yielded zero or several controls where one was required
    #[error("{role} control '{name}' must match exactly one element, found {found}")]
    Cardinality {
        role: Role,
        name: String,
        found: usize,
    },

    /// Control is of a type this library refuses to read or write
    #[error("{role} control '{name}' has unsupported type '{control_type}'")]
    UnsupportedKind {
        role: Role,
        name: String,
        control_type: String,
    },

    /// No conversion exists between the two kinds
    #[error(
        "cannot transfer '{source_name}' ({source_kind}, type '{source_type}') \
         to '{destination_name}' ({destination_kind}, type '{destination_type}')"
    )]
    UnsupportedTransfer {
        source_name: String,
        source_kind: ControlKind,
        source_type: String,
        destination_name: String,
        destination_kind: ControlKind,
        destination_type: String,
    },

    /// Literal write to a checkbox with something other than a boolean
    #[error("destination checkbox '{name}' requires a boolean literal, got {value}")]
    InvalidLiteral { name: String, value: String },

    /// Literal write target is neither text-like nor a checkbox
    #[error("destination control '{name}' ({kind}, type '{control_type}') cannot be written")]
    UnsupportedWriteTarget {
        name: String,
        kind: ControlKind,
        control_type: String,
    },
}
