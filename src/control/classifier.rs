use crate::control::control_model::{ControlDescriptor, ControlKind};

const UNSUPPORTED_TYPES: [&str; 5] = ["radio", "button", "file", "submit", "image"];

/// Classify a control from its tag and `type` attribute.
///
/// Matching is case-insensitive. A missing `type` attribute, and any type
/// that is neither a checkbox nor explicitly unsupported, is treated as
/// text-like.
pub fn classify(descriptor: &ControlDescriptor) -> ControlKind {
    let tag = descriptor.tag.to_ascii_lowercase();
    let input_type = descriptor
        .input_type
        .as_deref()
        .map(|t| t.trim().to_ascii_lowercase());

    match input_type.as_deref() {
        Some("checkbox") => ControlKind::Checkbox,
        Some(t) if UNSUPPORTED_TYPES.contains(&t) => ControlKind::Unsupported,

        // <select> reports select-one / select-multiple; both carry a value
        _ if tag == "select" => ControlKind::TextLike,

        None
        | Some("")
        | Some("text")
        | Some("hidden")
        | Some("select")
        | Some("select-one")
        | Some("url")
        | Some("email")
        | Some("tel") => ControlKind::TextLike,

        // Unclassified → default
        Some(_) => ControlKind::TextLike,
    }
}
