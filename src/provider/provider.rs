use std::fmt::Debug;

use crate::control::classifier::classify;
use crate::control::control_model::{ControlDescriptor, ControlKind};

/// Host UI capability the transfer engine is written against.
///
/// Handles are cheap copies; the provider owns the actual element state.
/// String accessors are only called for text-like controls and checked
/// accessors only for checkboxes.
pub trait ElementProvider {
    type Container: Copy + Debug;
    type Control: Copy + Debug;

    /// All controls under `container` whose `name` attribute equals `name`.
    fn find_by_name(&self, container: Self::Container, name: &str) -> Vec<Self::Control>;

    fn descriptor(&self, control: Self::Control) -> ControlDescriptor;

    fn kind(&self, control: Self::Control) -> ControlKind {
        classify(&self.descriptor(control))
    }

    fn string_value(&self, control: Self::Control) -> String;

    fn set_string_value(&mut self, control: Self::Control, value: &str);

    fn is_checked(&self, control: Self::Control) -> bool;

    fn set_checked(&mut self, control: Self::Control, checked: bool);
}
