use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_student, get_student, get_student_grades, get_students};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student).get(get_students))
        .route("/{student_id}", get(get_student))
        .route("/{student_id}/grades", get(get_student_grades))
}
