mod common;

use axum::http::StatusCode;
use common::{
    get_json, post_json, seed_grade, seed_module, seed_student, seed_tutor, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;

fn student_dto(student_id: &str, tutor_id: i32) -> serde_json::Value {
    json!({
        "student_id": student_id,
        "first_name": "Alan",
        "last_name": "Turing",
        "dob": "2000-01-01",
        "personal_tutor_id": tutor_id
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_with_no_grades_fails_classification(pool: PgPool) {
    let tutor_id = seed_tutor(&pool).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = post_json(app, "/api/students", student_dto("123456A", tutor_id)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["student_id"], "123456A");
    assert_eq!(body["dob"], "2000-01-01");
    assert_eq!(body["personal_tutor_id"], tutor_id);
    assert_eq!(body["average_grade"], json!(0.0));
    assert_eq!(body["classification"], "Fail");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_invalid_id_formats_rejected(pool: PgPool) {
    let tutor_id = seed_tutor(&pool).await;

    for bad_id in ["12345A", "1234567", "123456a", "A123456"] {
        let app = setup_test_app(pool.clone());
        let (status, body) = post_json(app, "/api/students", student_dto(bad_id, tutor_id)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "id: {}", bad_id);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("6 digits followed by 1 uppercase letter")
        );
    }

    // nothing reached the store
    let app = setup_test_app(pool.clone());
    let (status, body) = get_json(app, "/api/students").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_dob_today_or_future_rejected(pool: PgPool) {
    let tutor_id = seed_tutor(&pool).await;
    let today = chrono::Utc::now().date_naive();

    for dob in [today, today + chrono::Days::new(365)] {
        let app = setup_test_app(pool.clone());
        let mut dto = student_dto("123456A", tutor_id);
        dto["dob"] = json!(dob.to_string());

        let (status, body) = post_json(app, "/api/students", dto).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "dob: {}", dob);
        assert_eq!(body["error"], "dob must be in the past");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_with_unknown_tutor_rejected(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = post_json(app, "/api/students", student_dto("123456A", 9999)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Tutor 9999 does not exist");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_duplicate_id_conflicts(pool: PgPool) {
    let tutor_id = seed_tutor(&pool).await;
    seed_student(&pool, "123456A", tutor_id).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = post_json(app, "/api/students", student_dto("123456A", tutor_id)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_unknown_student_not_found(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = get_json(app, "/api/students/999999Z").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_average_tracks_recorded_grades(pool: PgPool) {
    let tutor_id = seed_tutor(&pool).await;
    let module_id = seed_module(&pool, tutor_id).await;
    seed_student(&pool, "123456A", tutor_id).await;

    // no grades yet: the defined default, not an error
    let app = setup_test_app(pool.clone());
    let (status, body) = get_json(app, "/api/students/123456A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["average_grade"], json!(0.0));
    assert_eq!(body["classification"], "Fail");

    seed_grade(&pool, "123456A", module_id, 0.85).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = get_json(app, "/api/students/123456A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["average_grade"], json!(0.85));
    assert_eq!(body["classification"], "Distinction");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_average_is_rounded_mean_of_two_grades(pool: PgPool) {
    let tutor_id = seed_tutor(&pool).await;
    let module_a = seed_module(&pool, tutor_id).await;
    let module_b = seed_module(&pool, tutor_id).await;
    seed_student(&pool, "123456A", tutor_id).await;
    seed_grade(&pool, "123456A", module_a, 0.85).await;
    seed_grade(&pool, "123456A", module_b, 0.90).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = get_json(app, "/api/students/123456A").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["average_grade"], json!(0.88));
    assert_eq!(body["classification"], "Distinction");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_and_single_get_produce_identical_shapes(pool: PgPool) {
    let tutor_id = seed_tutor(&pool).await;
    let module_id = seed_module(&pool, tutor_id).await;
    seed_student(&pool, "123456A", tutor_id).await;
    seed_grade(&pool, "123456A", module_id, 0.65).await;

    let app = setup_test_app(pool.clone());
    let (_, single) = get_json(app, "/api/students/123456A").await;

    let app = setup_test_app(pool.clone());
    let (status, list) = get_json(app, "/api/students").await;

    assert_eq!(status, StatusCode::OK);
    let students = list.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0], single);
    assert_eq!(students[0]["classification"], "Merit");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_student_grades(pool: PgPool) {
    let tutor_id = seed_tutor(&pool).await;
    let module_id = seed_module(&pool, tutor_id).await;
    seed_student(&pool, "123456A", tutor_id).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = get_json(app, "/api/students/123456A/grades").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    seed_grade(&pool, "123456A", module_id, 0.42).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = get_json(app, "/api/students/123456A/grades").await;
    assert_eq!(status, StatusCode::OK);
    let grades = body.as_array().unwrap();
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0]["student_id"], "123456A");
    assert_eq!(grades[0]["module_id"], module_id);
    assert_eq!(grades[0]["score"], json!(0.42));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_grades_of_unknown_student_not_found(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let (status, body) = get_json(app, "/api/students/999999Z/grades").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}
