use tracing::debug;

use crate::control::control_model::{ControlKind, Role};
use crate::provider::provider::ElementProvider;
use crate::transfer::error::TransferError;

/// Reduce a scope to its single container.
pub fn resolve_scope<P: ElementProvider>(
    scope: &[P::Container],
    role: Role,
) -> Result<P::Container, TransferError> {
    match scope {
        [container] => Ok(*container),
        _ => Err(TransferError::ScopeCardinality {
            role,
            found: scope.len(),
        }),
    }
}

/// Find every control named `name` inside the single container of `scope`.
pub fn resolve<P: ElementProvider>(
    provider: &P,
    scope: &[P::Container],
    role: Role,
    name: &str,
) -> Result<Vec<P::Control>, TransferError> {
    let container = resolve_scope::<P>(scope, role)?;
    let controls = provider.find_by_name(container, name);
    debug!(%role, control = name, found = controls.len(), "resolved controls");
    Ok(controls)
}

/// Check cardinality and kinds of a resolved set. Returns the set unchanged.
pub fn validate<P: ElementProvider>(
    provider: &P,
    controls: Vec<P::Control>,
    role: Role,
    name: &str,
    require_exactly_one: bool,
) -> Result<Vec<P::Control>, TransferError> {
    if require_exactly_one && controls.len() != 1 {
        return Err(TransferError::Cardinality {
            role,
            name: name.to_string(),
            found: controls.len(),
        });
    }

    for control in &controls {
        if provider.kind(*control) == ControlKind::Unsupported {
            return Err(TransferError::UnsupportedKind {
                role,
                name: name.to_string(),
                control_type: provider.descriptor(*control).type_label(),
            });
        }
    }

    Ok(controls)
}
