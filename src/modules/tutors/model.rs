//! Tutor data models and DTOs.
//!
//! Re-exports tutor models from the `markbook-models` crate.

pub use markbook_models::tutors::*;
