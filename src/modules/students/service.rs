use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use markbook_core::AppError;
use markbook_models::grades::Grade;

use crate::modules::students::model::{CreateStudentDto, Student, StudentResponse};

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db, dto))]
    pub async fn create_student(
        db: &PgPool,
        dto: CreateStudentDto,
    ) -> Result<StudentResponse, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"INSERT INTO students (student_id, first_name, last_name, dob, personal_tutor_id)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING student_id, first_name, last_name, dob, personal_tutor_id"#,
        )
        .bind(&dto.student_id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(dto.dob)
        .bind(dto.personal_tutor_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow::anyhow!(
                        "Student {} already exists",
                        dto.student_id
                    ));
                }
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Tutor {} does not exist",
                        dto.personal_tutor_id
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Self::assemble(db, student).await
    }

    #[instrument(skip(db))]
    pub async fn get_students(db: &PgPool) -> Result<Vec<StudentResponse>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            r#"SELECT student_id, first_name, last_name, dob, personal_tutor_id
               FROM students
               ORDER BY created_at, student_id"#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch students")
        .map_err(AppError::database)?;

        let mut responses = Vec::with_capacity(students.len());
        for student in students {
            responses.push(Self::assemble(db, student).await?);
        }

        Ok(responses)
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(
        db: &PgPool,
        student_id: &str,
    ) -> Result<StudentResponse, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"SELECT student_id, first_name, last_name, dob, personal_tutor_id
               FROM students
               WHERE student_id = $1"#,
        )
        .bind(student_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Self::assemble(db, student).await
    }

    #[instrument(skip(db))]
    pub async fn get_student_grades(
        db: &PgPool,
        student_id: &str,
    ) -> Result<Vec<Grade>, AppError> {
        // 404 for an unknown student, distinct from an empty grade set
        Self::ensure_student_exists(db, student_id).await?;

        let grades = sqlx::query_as::<_, Grade>(
            r#"SELECT student_id, module_id, score
               FROM grades
               WHERE student_id = $1
               ORDER BY created_at, module_id"#,
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch grades for student")
        .map_err(AppError::database)?;

        Ok(grades)
    }

    /// The one place the wire shape of a student is produced.
    ///
    /// Fetches the student's scores with an explicit query and derives
    /// `average_grade` and `classification`; create, get, and list all go
    /// through here.
    async fn assemble(db: &PgPool, student: Student) -> Result<StudentResponse, AppError> {
        let scores =
            sqlx::query_scalar::<_, f64>("SELECT score FROM grades WHERE student_id = $1")
                .bind(&student.student_id)
                .fetch_all(db)
                .await
                .context("Failed to fetch grade scores for student")
                .map_err(AppError::database)?;

        Ok(StudentResponse::assemble(student, &scores))
    }

    async fn ensure_student_exists(db: &PgPool, student_id: &str) -> Result<(), AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE student_id = $1)")
                .bind(student_id)
                .fetch_one(db)
                .await
                .context("Failed to check student existence")
                .map_err(AppError::database)?;

        if exists {
            Ok(())
        } else {
            Err(AppError::not_found(anyhow::anyhow!("Student not found")))
        }
    }
}
