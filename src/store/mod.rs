//! Catalog storage — typed repository interface over consoles and games.
//!
//! DESIGN
//! ======
//! Services talk to storage only through [`CatalogStore`]. Two backends
//! implement it: [`postgres::PgStore`] for production and
//! [`memory::MemoryStore`] for tests and database-less local runs.
//!
//! Both backends enforce the same constraints the schema declares: unique
//! `consoles.name`, unique `games.title`, and `games.console_id` referencing
//! an existing console. The service layer checks these first as a fast path;
//! a violation reported here is the authoritative answer when two requests
//! race between check and insert.

pub mod memory;
pub mod postgres;

use serde::{Deserialize, Serialize};

// =============================================================================
// ROWS
// =============================================================================

/// A named gaming platform. Mirrors the `consoles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Console {
    pub id: i32,
    pub name: String,
}

/// A titled game belonging to exactly one console. Mirrors the `games` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub console_id: i32,
}

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("id sequence exhausted: {0}")]
    IdExhausted(&'static str),
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or_default().to_owned();
            if db_err.is_unique_violation() {
                return Self::UniqueViolation(constraint);
            }
            if db_err.is_foreign_key_violation() {
                return Self::ForeignKeyViolation(constraint);
            }
        }
        Self::Database(err)
    }
}

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Storage collaborator required by the console and game services.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// All consoles in insertion order.
    async fn list_consoles(&self) -> Result<Vec<Console>, StoreError>;

    async fn find_console(&self, id: i32) -> Result<Option<Console>, StoreError>;

    async fn find_console_by_name(&self, name: &str) -> Result<Option<Console>, StoreError>;

    /// Insert a console with a freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns `UniqueViolation` if the name is already taken.
    async fn insert_console(&self, name: &str) -> Result<Console, StoreError>;

    /// All games in insertion order.
    async fn list_games(&self) -> Result<Vec<Game>, StoreError>;

    async fn find_game(&self, id: i32) -> Result<Option<Game>, StoreError>;

    async fn find_game_by_title(&self, title: &str) -> Result<Option<Game>, StoreError>;

    /// Insert a game with a freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns `UniqueViolation` if the title is already taken and
    /// `ForeignKeyViolation` if `console_id` names no console.
    async fn insert_game(&self, title: &str, console_id: i32) -> Result<Game, StoreError>;

    /// Delete every row from both tables. Id sequences are not reset.
    async fn clear_all(&self) -> Result<(), StoreError>;
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::store::memory::MemoryStore;

    /// Memory store whose name/title lookups always miss. Models a create
    /// that loses the race between the service pre-check and the insert.
    #[derive(Default)]
    pub struct BlindLookupStore {
        pub inner: MemoryStore,
    }

    impl BlindLookupStore {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait::async_trait]
    impl CatalogStore for BlindLookupStore {
        async fn list_consoles(&self) -> Result<Vec<Console>, StoreError> {
            self.inner.list_consoles().await
        }

        async fn find_console(&self, id: i32) -> Result<Option<Console>, StoreError> {
            self.inner.find_console(id).await
        }

        async fn find_console_by_name(&self, _name: &str) -> Result<Option<Console>, StoreError> {
            Ok(None)
        }

        async fn insert_console(&self, name: &str) -> Result<Console, StoreError> {
            self.inner.insert_console(name).await
        }

        async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
            self.inner.list_games().await
        }

        async fn find_game(&self, id: i32) -> Result<Option<Game>, StoreError> {
            self.inner.find_game(id).await
        }

        async fn find_game_by_title(&self, _title: &str) -> Result<Option<Game>, StoreError> {
            Ok(None)
        }

        async fn insert_game(&self, title: &str, console_id: i32) -> Result<Game, StoreError> {
            self.inner.insert_game(title, console_id).await
        }

        async fn clear_all(&self) -> Result<(), StoreError> {
            self.inner.clear_all().await
        }
    }
}
