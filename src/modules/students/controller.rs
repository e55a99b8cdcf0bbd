use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use markbook_core::AppError;
use markbook_models::grades::Grade;

use crate::modules::students::model::{CreateStudentDto, StudentResponse};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created successfully", body = StudentResponse),
        (status = 400, description = "Malformed body or unknown personal tutor"),
        (status = 409, description = "A student with this ID already exists"),
        (status = 422, description = "Invalid student ID format or date of birth")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    let student = StudentService::create_student(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "List of students with computed average and classification", body = Vec<StudentResponse>)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = StudentService::get_students(&state.db).await?;

    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/{student_id}",
    params(
        ("student_id" = String, Path, description = "Student ID, e.g. 123456A")
    ),
    responses(
        (status = 200, description = "Student with computed average and classification", body = StudentResponse),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = StudentService::get_student_by_id(&state.db, &student_id).await?;

    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/api/students/{student_id}/grades",
    params(
        ("student_id" = String, Path, description = "Student ID, e.g. 123456A")
    ),
    responses(
        (status = 200, description = "Grades recorded for the student", body = Vec<Grade>),
        (status = 404, description = "Student not found")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_grades(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades = StudentService::get_student_grades(&state.db, &student_id).await?;

    Ok(Json(grades))
}
