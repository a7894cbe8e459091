//! Copy values between named form controls, coercing between text-like
//! controls and checkboxes.
//!
//! The library is written against [`ElementProvider`], so any host that can
//! look controls up by name and read/write their value or checked state can
//! use it. [`PageSnapshot`] is the bundled in-memory provider.

pub mod cli;
pub mod control;
pub mod plan;
pub mod provider;
pub mod report;
pub mod trace;
pub mod transfer;

pub use control::control_model::{ControlDescriptor, ControlKind, Role};
pub use provider::provider::ElementProvider;
pub use provider::snapshot::PageSnapshot;
pub use transfer::error::TransferError;
pub use transfer::sync::{copy, set_value};
