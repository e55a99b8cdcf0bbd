//! Grade data models and DTOs.
//!
//! Re-exports grade models from the `markbook-models` crate.

pub use markbook_models::grades::*;
