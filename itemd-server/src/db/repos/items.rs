//! Item repository
//!
//! All five data operations against the `items` table. Writes use
//! INSERT/UPDATE ... RETURNING inside a transaction, so the stored record
//! comes back from the same statement that produced it.

use sqlx::{FromRow, SqlitePool};

use crate::models::ItemName;

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every stored item, ordered by id.
    pub async fn list_all(&self) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, description FROM items ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Get a single item by id, or `None` if it does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Item>, DbError> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, description FROM items WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(item)
    }

    /// Insert a new item and return the stored record with its assigned id.
    pub async fn create(
        &self,
        name: ItemName,
        description: Option<String>,
    ) -> Result<Item, DbError> {
        let mut tx = self.pool.begin().await?;

        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description)
            VALUES (?1, ?2)
            RETURNING id, name, description
            "#,
        )
        .bind(name.as_str())
        .bind(&description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(item)
    }

    /// Overwrite name/description of an existing item.
    ///
    /// Returns `None` without side effects when the id does not exist.
    pub async fn update(
        &self,
        id: i64,
        name: ItemName,
        description: Option<String>,
    ) -> Result<Option<Item>, DbError> {
        let mut tx = self.pool.begin().await?;

        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = ?1, description = ?2
            WHERE id = ?3
            RETURNING id, name, description
            "#,
        )
        .bind(name.as_str())
        .bind(&description)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(item)
    }

    /// Remove an item. Returns `false` when the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(rows > 0)
    }
}
