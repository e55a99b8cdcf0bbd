//! Student domain models and DTOs.
//!
//! The stored [`Student`] row carries no derived fields; the wire shape
//! [`StudentResponse`] always carries `average_grade` and `classification`,
//! assembled in one place ([`StudentResponse::assemble`]) so single-item and
//! list-item responses are identical.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::grading::{self, Classification};

/// Student IDs are six digits followed by one uppercase letter, e.g. "123456A".
static STUDENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}[A-Z]$").expect("valid student id pattern"));

/// A student as stored: identified by an externally formatted ID and
/// supervised by one personal tutor.
#[derive(Debug, FromRow)]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub personal_tutor_id: i32,
}

/// The external representation of a student.
///
/// `average_grade` and `classification` are derived from the student's grade
/// set on every read; they are never stored.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub personal_tutor_id: i32,
    pub average_grade: f64,
    pub classification: Classification,
}

impl StudentResponse {
    /// Build the wire shape from a stored student and their grade scores.
    ///
    /// This is the only constructor; every code path that returns a student
    /// goes through it.
    pub fn assemble(student: Student, scores: &[f64]) -> Self {
        let average_grade = grading::average(scores);
        Self {
            student_id: student.student_id,
            first_name: student.first_name,
            last_name: student.last_name,
            dob: student.dob,
            personal_tutor_id: student.personal_tutor_id,
            average_grade,
            classification: grading::classify(average_grade),
        }
    }
}

/// DTO for creating a new student.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(regex(
        path = *STUDENT_ID_PATTERN,
        message = "student_id must be 6 digits followed by 1 uppercase letter"
    ))]
    pub student_id: String,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(custom(function = dob_in_past))]
    pub dob: NaiveDate,
    pub personal_tutor_id: i32,
}

/// A date of birth must be strictly before today at validation time.
fn dob_in_past(dob: &NaiveDate) -> Result<(), ValidationError> {
    let today = chrono::Utc::now().date_naive();
    if *dob < today {
        Ok(())
    } else {
        let mut err = ValidationError::new("dob_in_past");
        err.message = Some("dob must be in the past".into());
        Err(err)
    }
}
