use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use markbook_core::AppError;

use crate::modules::tutors::model::{CreateTutorDto, Tutor};

pub struct TutorService;

impl TutorService {
    #[instrument(skip(db, dto))]
    pub async fn create_tutor(db: &PgPool, dto: CreateTutorDto) -> Result<Tutor, AppError> {
        let tutor = sqlx::query_as::<_, Tutor>(
            r#"INSERT INTO tutors (title, first_name, last_name, email)
               VALUES ($1, $2, $3, $4)
               RETURNING id, title, first_name, last_name, email"#,
        )
        .bind(&dto.title)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::conflict(anyhow::anyhow!(
                    "Tutor with email {} already exists",
                    dto.email
                ));
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(tutor)
    }

    #[instrument(skip(db))]
    pub async fn get_tutors(db: &PgPool) -> Result<Vec<Tutor>, AppError> {
        let tutors = sqlx::query_as::<_, Tutor>(
            r#"SELECT id, title, first_name, last_name, email
               FROM tutors
               ORDER BY created_at, id"#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch tutors")
        .map_err(AppError::database)?;

        Ok(tutors)
    }

    #[instrument(skip(db))]
    pub async fn get_tutor_by_id(db: &PgPool, id: i32) -> Result<Tutor, AppError> {
        let tutor = sqlx::query_as::<_, Tutor>(
            r#"SELECT id, title, first_name, last_name, email
               FROM tutors
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch tutor by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Tutor not found")))?;

        Ok(tutor)
    }
}
