use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{create_grade, get_module_grades, update_grade};

pub fn init_grades_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_grade))
        .route("/module/{module_id}", get(get_module_grades))
        .route("/{student_id}/{module_id}", put(update_grade))
}
