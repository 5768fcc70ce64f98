//! A durable store backed by an SQLite database.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::store::durable_store::{DurableStore, StoreError};

#[derive(Clone)]
pub(crate) struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  /// Constructs a new [`SqliteStore`], creating the backing table if it does not exist yet.
  pub(crate) async fn new(pool: SqlitePool) -> Result<Self, StoreError> {
    sqlx::query(
      "CREATE TABLE IF NOT EXISTS session_store (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
    )
    .execute(&pool)
    .await?;
    Ok(SqliteStore { pool })
  }
}

#[async_trait]
impl DurableStore for SqliteStore {
  async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    let row = sqlx::query("SELECT value FROM session_store WHERE key = $1")
      .bind(key)
      .fetch_optional(&self.pool)
      .await?;
    Ok(row.map(|r| r.get("value")))
  }

  async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    sqlx::query(
      "INSERT INTO session_store (key, value) VALUES ($1, $2) \
       ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )
    .bind(key)
    .bind(value)
    .execute(&self.pool)
    .await?;
    Ok(())
  }

  async fn delete(&self, key: &str) -> Result<(), StoreError> {
    sqlx::query("DELETE FROM session_store WHERE key = $1")
      .bind(key)
      .execute(&self.pool)
      .await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use sqlx::SqlitePool;

  use crate::store::durable_store::{DurableStore, keys};
  use crate::store::sqlite_store::SqliteStore;

  #[sqlx::test]
  async fn roundtrip_test(pool: SqlitePool) {
    let store = SqliteStore::new(pool).await.expect("Store setup should succeed!");

    let token = uuid::Uuid::new_v4().to_string();
    store.set(keys::TOKEN, &token).await.expect("Set should succeed!");
    let value = store.get(keys::TOKEN).await.expect("Get should succeed!");
    assert_eq!(Some(token), value);
  }

  #[sqlx::test]
  async fn overwrite_test(pool: SqlitePool) {
    let store = SqliteStore::new(pool).await.expect("Store setup should succeed!");

    store.set(keys::ROLE, "USER").await.expect("Set should succeed!");
    store.set(keys::ROLE, "TEACHER").await.expect("Set should succeed!");
    let value = store.get(keys::ROLE).await.expect("Get should succeed!");
    assert_eq!(Some("TEACHER".to_string()), value);
  }

  #[sqlx::test]
  async fn delete_test(pool: SqlitePool) {
    let store = SqliteStore::new(pool).await.expect("Store setup should succeed!");

    store.set(keys::USERNAME, "bob").await.expect("Set should succeed!");
    store.delete(keys::USERNAME).await.expect("Delete should succeed!");
    let value = store.get(keys::USERNAME).await.expect("Get should succeed!");
    assert_eq!(None, value);
  }

  #[sqlx::test]
  async fn delete_missing_key_test(pool: SqlitePool) {
    let store = SqliteStore::new(pool).await.expect("Store setup should succeed!");

    store.delete(keys::PROFILE_PICTURE).await.expect("Delete should succeed!");
  }

  #[sqlx::test]
  async fn get_missing_key_test(pool: SqlitePool) {
    let store = SqliteStore::new(pool).await.expect("Store setup should succeed!");

    let value = store.get(keys::ID).await.expect("Get should succeed!");
    assert_eq!(None, value);
  }
}
