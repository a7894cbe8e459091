use serde_json::Value;
use tracing::debug;

use crate::control::control_model::ControlKind;
use crate::provider::provider::ElementProvider;
use crate::transfer::error::TransferError;

/// String values that check a checkbox. Compared case-insensitively.
const TRUTHY_VALUES: [&str; 5] = ["1", "-1", "true", "yes", "on"];

/// Loose value-to-boolean coercion used when a text-like value lands on a
/// checkbox. Anything outside the truthy set, including the empty string,
/// maps to `false`.
pub fn coerce_to_checked(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    TRUTHY_VALUES.contains(&normalized.as_str())
}

/// Copy one control's value onto another, converting between kinds.
///
/// | source    | destination | effect                         |
/// |-----------|-------------|--------------------------------|
/// | checkbox  | checkbox    | checked state copied           |
/// | text-like | checkbox    | checked = coerce(source value) |
/// | text-like | text-like   | string value copied            |
/// | otherwise |             | `UnsupportedTransfer`          |
pub fn copy_control<P: ElementProvider>(
    provider: &mut P,
    source: P::Control,
    destination: P::Control,
) -> Result<(), TransferError> {
    let source_kind = provider.kind(source);
    let destination_kind = provider.kind(destination);

    match (source_kind, destination_kind) {
        (ControlKind::Checkbox, ControlKind::Checkbox) => {
            let checked = provider.is_checked(source);
            debug!(checked, "checkbox -> checkbox");
            provider.set_checked(destination, checked);
            Ok(())
        }
        (ControlKind::TextLike, ControlKind::Checkbox) => {
            let value = provider.string_value(source);
            let checked = coerce_to_checked(&value);
            debug!(value = %value, checked, "text -> checkbox");
            provider.set_checked(destination, checked);
            Ok(())
        }
        (ControlKind::TextLike, ControlKind::TextLike) => {
            let value = provider.string_value(source);
            debug!(value = %value, "text -> text");
            provider.set_string_value(destination, &value);
            Ok(())
        }
        _ => {
            let from = provider.descriptor(source);
            let to = provider.descriptor(destination);
            Err(TransferError::UnsupportedTransfer {
                source_type: from.type_label(),
                source_name: from.name,
                source_kind,
                destination_type: to.type_label(),
                destination_name: to.name,
                destination_kind,
            })
        }
    }
}

/// Write a literal value to a control.
///
/// Checkboxes only accept `Value::Bool`; strings such as `"true"` are
/// rejected rather than coerced. Text-like controls accept any value.
pub fn set_literal<P: ElementProvider>(
    provider: &mut P,
    value: &Value,
    destination: P::Control,
) -> Result<(), TransferError> {
    match provider.kind(destination) {
        ControlKind::Checkbox => match value {
            Value::Bool(checked) => {
                provider.set_checked(destination, *checked);
                Ok(())
            }
            other => Err(TransferError::InvalidLiteral {
                name: provider.descriptor(destination).name,
                value: other.to_string(),
            }),
        },
        ControlKind::TextLike => {
            let text = literal_text(value);
            provider.set_string_value(destination, &text);
            Ok(())
        }
        kind => {
            let descriptor = provider.descriptor(destination);
            Err(TransferError::UnsupportedWriteTarget {
                control_type: descriptor.type_label(),
                name: descriptor.name,
                kind,
            })
        }
    }
}

/// String form of a literal for a text-like control.
pub fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
