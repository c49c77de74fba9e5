use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;
use std::env;

/// Open the local cart store and bring its schema up to date
///
/// Environment variables:
/// - CART_DATABASE_URL: SQLite connection string
///   (default: "sqlite://storefront-cart.db?mode=rwc")
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let db_url = env::var("CART_DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://storefront-cart.db?mode=rwc".to_string());
    let pool = create_sqlite_pool(&DatabaseConfig::new(db_url)).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
