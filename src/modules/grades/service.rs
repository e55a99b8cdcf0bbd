use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use markbook_core::AppError;

use crate::modules::grades::model::{CreateGradeDto, Grade, UpdateGradeDto};

pub struct GradeService;

impl GradeService {
    /// Insert a new grade, relying on the composite primary key and foreign
    /// keys to reject duplicates and dangling references atomically.
    #[instrument(skip(db, dto))]
    pub async fn create_grade(db: &PgPool, dto: CreateGradeDto) -> Result<Grade, AppError> {
        let grade = sqlx::query_as::<_, Grade>(
            r#"INSERT INTO grades (student_id, module_id, score)
               VALUES ($1, $2, $3)
               RETURNING student_id, module_id, score"#,
        )
        .bind(&dto.student_id)
        .bind(dto.module_id)
        .bind(dto.score)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow::anyhow!(
                        "Grade for student {} in module {} already exists",
                        dto.student_id,
                        dto.module_id
                    ));
                }
                if db_err.is_foreign_key_violation() {
                    // Constraint name identifies which reference is dangling
                    let detail = match db_err.constraint() {
                        Some("grades_student_id_fkey") => {
                            format!("Student {} does not exist", dto.student_id)
                        }
                        Some("grades_module_id_fkey") => {
                            format!("Module {} does not exist", dto.module_id)
                        }
                        _ => "Referenced student or module does not exist".to_string(),
                    };
                    return AppError::bad_request(anyhow::anyhow!(detail));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(grade)
    }

    #[instrument(skip(db))]
    pub async fn get_module_grades(db: &PgPool, module_id: i32) -> Result<Vec<Grade>, AppError> {
        // 404 for an unknown module, distinct from an empty grade set
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM modules WHERE id = $1)")
                .bind(module_id)
                .fetch_one(db)
                .await
                .context("Failed to check module existence")
                .map_err(AppError::database)?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!("Module not found")));
        }

        let grades = sqlx::query_as::<_, Grade>(
            r#"SELECT student_id, module_id, score
               FROM grades
               WHERE module_id = $1
               ORDER BY created_at, student_id"#,
        )
        .bind(module_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch grades for module")
        .map_err(AppError::database)?;

        Ok(grades)
    }

    /// Update the score of an existing grade, keyed by the composite
    /// identity. The pair itself never changes.
    #[instrument(skip(db, dto))]
    pub async fn update_grade(
        db: &PgPool,
        student_id: &str,
        module_id: i32,
        dto: UpdateGradeDto,
    ) -> Result<Grade, AppError> {
        let grade = sqlx::query_as::<_, Grade>(
            r#"UPDATE grades
               SET score = $3
               WHERE student_id = $1 AND module_id = $2
               RETURNING student_id, module_id, score"#,
        )
        .bind(student_id)
        .bind(module_id)
        .bind(dto.score)
        .fetch_optional(db)
        .await
        .context("Failed to update grade")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Grade not found")))?;

        Ok(grade)
    }
}
