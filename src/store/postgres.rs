//! Postgres catalog store.
//!
//! ERROR HANDLING
//! ==============
//! Inserts do not pre-check anything; the schema's unique and foreign key
//! constraints reject bad rows, and `StoreError::from` turns the SQLSTATE
//! into `UniqueViolation` / `ForeignKeyViolation`.

use sqlx::PgPool;

use super::{CatalogStore, Console, Game, StoreError};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CatalogStore for PgStore {
    async fn list_consoles(&self) -> Result<Vec<Console>, StoreError> {
        let rows = sqlx::query_as::<_, (i32, String)>("SELECT id, name FROM consoles ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|(id, name)| Console { id, name }).collect())
    }

    async fn find_console(&self, id: i32) -> Result<Option<Console>, StoreError> {
        let row = sqlx::query_as::<_, (i32, String)>("SELECT id, name FROM consoles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(id, name)| Console { id, name }))
    }

    async fn find_console_by_name(&self, name: &str) -> Result<Option<Console>, StoreError> {
        let row = sqlx::query_as::<_, (i32, String)>("SELECT id, name FROM consoles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(id, name)| Console { id, name }))
    }

    async fn insert_console(&self, name: &str) -> Result<Console, StoreError> {
        let (id, name) =
            sqlx::query_as::<_, (i32, String)>("INSERT INTO consoles (name) VALUES ($1) RETURNING id, name")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(Console { id, name })
    }

    async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        let rows = sqlx::query_as::<_, (i32, String, i32)>("SELECT id, title, console_id FROM games ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, title, console_id)| Game { id, title, console_id })
            .collect())
    }

    async fn find_game(&self, id: i32) -> Result<Option<Game>, StoreError> {
        let row = sqlx::query_as::<_, (i32, String, i32)>("SELECT id, title, console_id FROM games WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(id, title, console_id)| Game { id, title, console_id }))
    }

    async fn find_game_by_title(&self, title: &str) -> Result<Option<Game>, StoreError> {
        let row =
            sqlx::query_as::<_, (i32, String, i32)>("SELECT id, title, console_id FROM games WHERE title = $1")
                .bind(title)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(id, title, console_id)| Game { id, title, console_id }))
    }

    async fn insert_game(&self, title: &str, console_id: i32) -> Result<Game, StoreError> {
        let (id, title, console_id) = sqlx::query_as::<_, (i32, String, i32)>(
            "INSERT INTO games (title, console_id) VALUES ($1, $2) RETURNING id, title, console_id",
        )
        .bind(title)
        .bind(console_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Game { id, title, console_id })
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM games").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM consoles").execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
