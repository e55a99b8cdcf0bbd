use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use markbook_core::AppError;

use crate::modules::tutors::model::{CreateTutorDto, Tutor};
use crate::modules::tutors::service::TutorService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/tutors",
    request_body = CreateTutorDto,
    responses(
        (status = 201, description = "Tutor created successfully", body = Tutor),
        (status = 400, description = "Malformed request body"),
        (status = 409, description = "A tutor with this email already exists"),
        (status = 422, description = "Invalid field values")
    ),
    tag = "Tutors"
)]
#[instrument(skip(state))]
pub async fn create_tutor(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTutorDto>,
) -> Result<(StatusCode, Json<Tutor>), AppError> {
    let tutor = TutorService::create_tutor(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(tutor)))
}

#[utoipa::path(
    get,
    path = "/api/tutors",
    responses(
        (status = 200, description = "List of tutors in insertion order", body = Vec<Tutor>)
    ),
    tag = "Tutors"
)]
#[instrument(skip(state))]
pub async fn get_tutors(State(state): State<AppState>) -> Result<Json<Vec<Tutor>>, AppError> {
    let tutors = TutorService::get_tutors(&state.db).await?;

    Ok(Json(tutors))
}

#[utoipa::path(
    get,
    path = "/api/tutors/{id}",
    params(
        ("id" = i32, Path, description = "Tutor ID")
    ),
    responses(
        (status = 200, description = "Tutor details", body = Tutor),
        (status = 404, description = "Tutor not found")
    ),
    tag = "Tutors"
)]
#[instrument(skip(state))]
pub async fn get_tutor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Tutor>, AppError> {
    let tutor = TutorService::get_tutor_by_id(&state.db, id).await?;

    Ok(Json(tutor))
}
