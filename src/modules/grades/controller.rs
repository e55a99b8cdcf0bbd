use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use markbook_core::AppError;

use crate::modules::grades::model::{CreateGradeDto, Grade, UpdateGradeDto};
use crate::modules::grades::service::GradeService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/grades",
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Grade recorded successfully", body = Grade),
        (status = 400, description = "Malformed body or unknown student/module"),
        (status = 409, description = "A grade for this student and module already exists"),
        (status = 422, description = "Score out of range")
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn create_grade(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateGradeDto>,
) -> Result<(StatusCode, Json<Grade>), AppError> {
    let grade = GradeService::create_grade(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(grade)))
}

#[utoipa::path(
    get,
    path = "/api/grades/module/{module_id}",
    params(
        ("module_id" = i32, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Grades recorded in the module", body = Vec<Grade>),
        (status = 404, description = "Module not found")
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn get_module_grades(
    State(state): State<AppState>,
    Path(module_id): Path<i32>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades = GradeService::get_module_grades(&state.db, module_id).await?;

    Ok(Json(grades))
}

#[utoipa::path(
    put,
    path = "/api/grades/{student_id}/{module_id}",
    params(
        ("student_id" = String, Path, description = "Student ID, e.g. 123456A"),
        ("module_id" = i32, Path, description = "Module ID")
    ),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Grade updated successfully", body = Grade),
        (status = 404, description = "No grade exists for this student and module"),
        (status = 422, description = "Score out of range")
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn update_grade(
    State(state): State<AppState>,
    Path((student_id, module_id)): Path<(String, i32)>,
    ValidatedJson(dto): ValidatedJson<UpdateGradeDto>,
) -> Result<Json<Grade>, AppError> {
    let grade = GradeService::update_grade(&state.db, &student_id, module_id, dto).await?;

    Ok(Json(grade))
}
