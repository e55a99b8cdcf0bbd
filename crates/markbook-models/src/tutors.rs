//! Tutor domain models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A tutor: teaches course modules and personally supervises students.
///
/// Tutors are immutable after creation; the `id` is system-assigned and the
/// email address is unique across all tutors.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Tutor {
    pub id: i32,
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// DTO for creating a new tutor.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTutorDto {
    #[validate(length(max = 10))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}
