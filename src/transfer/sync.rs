use serde_json::Value;
use tracing::debug;

use crate::control::control_model::Role;
use crate::provider::provider::ElementProvider;
use crate::transfer::engine::{copy_control, set_literal};
use crate::transfer::error::TransferError;
use crate::transfer::locator::{resolve, resolve_scope, validate};

/// Copy the control `from_name` in `from_scope` onto the control(s)
/// `to_name` (defaults to `from_name`) in `to_scope`.
///
/// Returns the number of destination controls written. With
/// `allow_multiple_to` every matching destination receives the value;
/// a failure part-way leaves earlier destinations written.
pub fn copy<P: ElementProvider>(
    provider: &mut P,
    from_scope: &[P::Container],
    to_scope: &[P::Container],
    from_name: &str,
    to_name: Option<&str>,
    allow_multiple_to: bool,
) -> Result<usize, TransferError> {
    resolve_scope::<P>(from_scope, Role::Source)?;
    resolve_scope::<P>(to_scope, Role::Destination)?;

    let sources = resolve(&*provider, from_scope, Role::Source, from_name)?;
    let sources = validate(&*provider, sources, Role::Source, from_name, true)?;
    let source = sources[0];

    let to_name = to_name.unwrap_or(from_name);
    let destinations = resolve(&*provider, to_scope, Role::Destination, to_name)?;
    let destinations = validate(
        &*provider,
        destinations,
        Role::Destination,
        to_name,
        !allow_multiple_to,
    )?;

    for destination in &destinations {
        copy_control(provider, source, *destination)?;
    }

    debug!(from_name, to_name, written = destinations.len(), "copy complete");
    Ok(destinations.len())
}

/// Write a literal to the control(s) `to_name` in `to_scope`.
///
/// Returns the number of controls written.
pub fn set_value<P: ElementProvider>(
    provider: &mut P,
    value: &Value,
    to_scope: &[P::Container],
    to_name: &str,
    allow_multiple_to: bool,
) -> Result<usize, TransferError> {
    let destinations = resolve(&*provider, to_scope, Role::Destination, to_name)?;
    let destinations = validate(
        &*provider,
        destinations,
        Role::Destination,
        to_name,
        !allow_multiple_to,
    )?;

    for destination in &destinations {
        set_literal(provider, value, *destination)?;
    }

    debug!(to_name, written = destinations.len(), "set_value complete");
    Ok(destinations.len())
}
