//! # Markbook Models
//!
//! Domain models and DTOs for the Markbook API.
//!
//! This crate provides all data structures used throughout the application:
//! database entities, request/response DTOs with validation rules, and the
//! pure grade-aggregation logic.
//!
//! # Modules
//!
//! - [`tutors`]: tutor entity and DTOs
//! - [`course_modules`]: course module entity and DTOs
//! - [`students`]: student entity, DTOs, and the assembled response shape
//! - [`grades`]: grade entity and DTOs
//! - [`grading`]: average and classification over a student's grade set

pub mod course_modules;
pub mod grades;
pub mod grading;
pub mod students;
pub mod tutors;

// Re-export commonly used types at crate root for convenience
pub use course_modules::{CreateModuleDto, Module};
pub use grades::{CreateGradeDto, Grade, UpdateGradeDto};
pub use grading::{Classification, average, classify};
pub use students::{CreateStudentDto, Student, StudentResponse};
pub use tutors::{CreateTutorDto, Tutor};
