//! Grade domain models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A score in [0, 1] for one student in one course module.
///
/// The pair `(student_id, module_id)` is the composite identity: at most one
/// grade exists per pair, and the pair is immutable once created. Only the
/// score can change, via the update operation.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Grade {
    pub student_id: String,
    pub module_id: i32,
    pub score: f64,
}

/// DTO for recording a new grade.
///
/// Both referenced rows must already exist; a second grade for the same
/// `(student_id, module_id)` pair is rejected, not overwritten.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGradeDto {
    pub student_id: String,
    pub module_id: i32,
    #[validate(range(min = 0.0, max = 1.0, message = "score must be between 0 and 1"))]
    pub score: f64,
}

/// DTO for updating an existing grade's score.
///
/// The composite key lives in the request path and cannot be changed.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGradeDto {
    #[validate(range(min = 0.0, max = 1.0, message = "score must be between 0 and 1"))]
    pub score: f64,
}
