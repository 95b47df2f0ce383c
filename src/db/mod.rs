//! Database module
//!
//! This module handles database connections, migrations, and repositories.
//! Every repository method here is a read; the judge backend owns the writes.

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::*;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
