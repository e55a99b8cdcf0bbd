use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use markbook::config::cors::CorsConfig;
use markbook::router::init_router;
use markbook::state::AppState;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub fn setup_test_app(pool: PgPool) -> Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

pub fn generate_unique_email() -> String {
    format!("tutor-{}@test.com", Uuid::new_v4())
}

/// Seed a tutor directly, returning its generated id.
pub async fn seed_tutor(pool: &PgPool) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"INSERT INTO tutors (title, first_name, last_name, email)
           VALUES ('Dr', 'Test', 'Tutor', $1)
           RETURNING id"#,
    )
    .bind(generate_unique_email())
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Seed a module taught by the given tutor, returning its generated id.
pub async fn seed_module(pool: &PgPool, tutor_id: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r#"INSERT INTO modules (title, module_tutor_id)
           VALUES ('Test Module', $1)
           RETURNING id"#,
    )
    .bind(tutor_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_student(pool: &PgPool, student_id: &str, tutor_id: i32) {
    sqlx::query(
        r#"INSERT INTO students (student_id, first_name, last_name, dob, personal_tutor_id)
           VALUES ($1, 'Test', 'Student', '2000-01-01', $2)"#,
    )
    .bind(student_id)
    .bind(tutor_id)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_grade(pool: &PgPool, student_id: &str, module_id: i32, score: f64) {
    sqlx::query(
        r#"INSERT INTO grades (student_id, module_id, score)
           VALUES ($1, $2, $3)"#,
    )
    .bind(student_id)
    .bind(module_id)
    .bind(score)
    .execute(pool)
    .await
    .unwrap();
}

/// POST a JSON body and return the status with the parsed response body.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// PUT a JSON body and return the status with the parsed response body.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// GET a route and return the status with the parsed response body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
