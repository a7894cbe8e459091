pub mod engine;
pub mod error;
pub mod locator;
pub mod sync;
