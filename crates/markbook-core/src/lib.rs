//! # Markbook Core
//!
//! Core types shared across the Markbook API.
//!
//! This crate provides the application error type used throughout the
//! workspace:
//!
//! - [`errors`]: application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use markbook_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::AppError;
