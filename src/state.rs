use markbook_db::PgPool;

use crate::config::cors::CorsConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: markbook_db::init_db_pool().await,
        cors_config: CorsConfig::from_env(),
    }
}
