//! Student data models and DTOs.
//!
//! Re-exports student models from the `markbook-models` crate.

pub use markbook_models::students::*;
