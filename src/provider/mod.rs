pub mod provider;
pub mod snapshot;
