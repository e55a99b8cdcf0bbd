use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use markbook_core::AppError;

use crate::modules::course_modules::model::{CreateModuleDto, Module};

pub struct ModuleService;

impl ModuleService {
    #[instrument(skip(db, dto))]
    pub async fn create_module(db: &PgPool, dto: CreateModuleDto) -> Result<Module, AppError> {
        let module = sqlx::query_as::<_, Module>(
            r#"INSERT INTO modules (title, module_tutor_id)
               VALUES ($1, $2)
               RETURNING id, title, module_tutor_id"#,
        )
        .bind(&dto.title)
        .bind(dto.module_tutor_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_foreign_key_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "Tutor {} does not exist",
                    dto.module_tutor_id
                ));
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(module)
    }

    #[instrument(skip(db))]
    pub async fn get_modules(db: &PgPool) -> Result<Vec<Module>, AppError> {
        let modules = sqlx::query_as::<_, Module>(
            r#"SELECT id, title, module_tutor_id
               FROM modules
               ORDER BY created_at, id"#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch modules")
        .map_err(AppError::database)?;

        Ok(modules)
    }

    #[instrument(skip(db))]
    pub async fn get_module_by_id(db: &PgPool, id: i32) -> Result<Module, AppError> {
        let module = sqlx::query_as::<_, Module>(
            r#"SELECT id, title, module_tutor_id
               FROM modules
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch module by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Module not found")))?;

        Ok(module)
    }
}
