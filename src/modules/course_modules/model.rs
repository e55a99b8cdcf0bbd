//! Course module data models and DTOs.
//!
//! Re-exports course module models from the `markbook-models` crate.

pub use markbook_models::course_modules::*;
