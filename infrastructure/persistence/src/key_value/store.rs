use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;

use super::entity::KeyValueEntity;

/// Durable string key-value store backed by a single SQLite table.
#[derive(Clone)]
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn read(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, KeyValueEntity>(
            "SELECT key, value FROM key_value_store WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.value))
    }

    pub async fn write(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO key_value_store (key, value)
            VALUES (?, ?)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DatabaseConfig, create_sqlite_pool, run_migrations};

    async fn store() -> SqliteKeyValueStore {
        let pool = create_sqlite_pool(&DatabaseConfig::in_memory())
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteKeyValueStore::new(pool)
    }

    #[tokio::test]
    async fn should_return_none_for_missing_key() {
        let store = store().await;

        assert_eq!(store.read("@RocketShoes:cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_read_back_written_value() {
        let store = store().await;

        store.write("@RocketShoes:cart", "[]").await.unwrap();

        assert_eq!(
            store.read("@RocketShoes:cart").await.unwrap(),
            Some("[]".to_string())
        );
    }

    #[tokio::test]
    async fn should_overwrite_existing_value() {
        let store = store().await;

        store.write("slot", "first").await.unwrap();
        store.write("slot", "second").await.unwrap();

        assert_eq!(store.read("slot").await.unwrap(), Some("second".to_string()));
    }

    #[tokio::test]
    async fn should_keep_keys_isolated() {
        let store = store().await;

        store.write("a", "1").await.unwrap();
        store.write("b", "2").await.unwrap();
        store.write("a", "3").await.unwrap();

        assert_eq!(store.read("a").await.unwrap(), Some("3".to_string()));
        assert_eq!(store.read("b").await.unwrap(), Some("2".to_string()));
        assert_eq!(store.read("c").await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_fail_when_schema_missing() {
        let pool = create_sqlite_pool(&DatabaseConfig::in_memory())
            .await
            .unwrap();
        let store = SqliteKeyValueStore::new(pool);

        assert!(matches!(
            store.read("slot").await.unwrap_err(),
            RepositoryError::DatabaseError
        ));
    }
}
