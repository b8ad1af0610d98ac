//! In-memory catalog store.
//!
//! Rows live in insertion-ordered vectors behind a single `RwLock`, so each
//! insert performs its constraint checks and the write under one guard.

use tokio::sync::RwLock;

use super::{CatalogStore, Console, Game, StoreError};

const CONSOLES_NAME_KEY: &str = "consoles_name_key";
const GAMES_TITLE_KEY: &str = "games_title_key";
const GAMES_CONSOLE_FKEY: &str = "games_console_id_fkey";

#[derive(Default)]
struct Tables {
    consoles: Vec<Console>,
    games: Vec<Game>,
    last_console_id: i32,
    last_game_id: i32,
}

fn next_id(last: i32, table: &'static str) -> Result<i32, StoreError> {
    last.checked_add(1).ok_or(StoreError::IdExhausted(table))
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CatalogStore for MemoryStore {
    async fn list_consoles(&self) -> Result<Vec<Console>, StoreError> {
        Ok(self.tables.read().await.consoles.clone())
    }

    async fn find_console(&self, id: i32) -> Result<Option<Console>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.consoles.iter().find(|c| c.id == id).cloned())
    }

    async fn find_console_by_name(&self, name: &str) -> Result<Option<Console>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.consoles.iter().find(|c| c.name == name).cloned())
    }

    async fn insert_console(&self, name: &str) -> Result<Console, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.consoles.iter().any(|c| c.name == name) {
            return Err(StoreError::UniqueViolation(CONSOLES_NAME_KEY.into()));
        }

        let id = next_id(tables.last_console_id, "consoles")?;
        tables.last_console_id = id;
        let console = Console { id, name: name.to_owned() };
        tables.consoles.push(console.clone());
        Ok(console)
    }

    async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        Ok(self.tables.read().await.games.clone())
    }

    async fn find_game(&self, id: i32) -> Result<Option<Game>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.games.iter().find(|g| g.id == id).cloned())
    }

    async fn find_game_by_title(&self, title: &str) -> Result<Option<Game>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.games.iter().find(|g| g.title == title).cloned())
    }

    async fn insert_game(&self, title: &str, console_id: i32) -> Result<Game, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.games.iter().any(|g| g.title == title) {
            return Err(StoreError::UniqueViolation(GAMES_TITLE_KEY.into()));
        }
        if !tables.consoles.iter().any(|c| c.id == console_id) {
            return Err(StoreError::ForeignKeyViolation(GAMES_CONSOLE_FKEY.into()));
        }

        let id = next_id(tables.last_game_id, "games")?;
        tables.last_game_id = id;
        let game = Game { id, title: title.to_owned(), console_id };
        tables.games.push(game.clone());
        Ok(game)
    }

    async fn clear_all(&self) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.games.clear();
        tables.consoles.clear();
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
