use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use markbook_core::AppError;

use crate::modules::course_modules::model::{CreateModuleDto, Module};
use crate::modules::course_modules::service::ModuleService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/modules",
    request_body = CreateModuleDto,
    responses(
        (status = 201, description = "Module created successfully", body = Module),
        (status = 400, description = "Malformed body or unknown tutor"),
        (status = 422, description = "Invalid field values")
    ),
    tag = "Modules"
)]
#[instrument(skip(state))]
pub async fn create_module(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateModuleDto>,
) -> Result<(StatusCode, Json<Module>), AppError> {
    let module = ModuleService::create_module(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(module)))
}

#[utoipa::path(
    get,
    path = "/api/modules",
    responses(
        (status = 200, description = "List of modules in insertion order", body = Vec<Module>)
    ),
    tag = "Modules"
)]
#[instrument(skip(state))]
pub async fn get_modules(State(state): State<AppState>) -> Result<Json<Vec<Module>>, AppError> {
    let modules = ModuleService::get_modules(&state.db).await?;

    Ok(Json(modules))
}

#[utoipa::path(
    get,
    path = "/api/modules/{id}",
    params(
        ("id" = i32, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Module details", body = Module),
        (status = 404, description = "Module not found")
    ),
    tag = "Modules"
)]
#[instrument(skip(state))]
pub async fn get_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Module>, AppError> {
    let module = ModuleService::get_module_by_id(&state.db, id).await?;

    Ok(Json(module))
}
