use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_tutor, get_tutor, get_tutors};

pub fn init_tutors_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tutor).get(get_tutors))
        .route("/{id}", get(get_tutor))
}
