//! Course module domain models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A course module taught by exactly one tutor.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Module {
    pub id: i32,
    pub title: String,
    pub module_tutor_id: i32,
}

/// DTO for creating a new course module.
///
/// `module_tutor_id` must reference an existing tutor; the foreign key
/// constraint is the source of truth for that check.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateModuleDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub module_tutor_id: i32,
}
