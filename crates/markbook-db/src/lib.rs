//! # Markbook DB
//!
//! Database pool initialization for the Markbook API.
//!
//! The pool is created once at startup from `DATABASE_URL` and passed by
//! reference to every service call; there is no ambient global connection.
//!
//! # Example
//!
//! ```ignore
//! use markbook_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool().await;
//!     // Use pool for database operations
//! }
//! ```

use std::env;

/// Initializes a PostgreSQL connection pool.
///
/// Reads the database URL from the `DATABASE_URL` environment variable.
/// The returned [`sqlx::PgPool`] is cheaply cloneable and is stored in the
/// application state for use in request handlers.
///
/// # Panics
///
/// Panics if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
