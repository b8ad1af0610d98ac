//! Game service — list, get, and create with console and title checks.
//!
//! DESIGN
//! ======
//! `create_game` runs two checks before inserting, in this order:
//! 1. the referenced console must exist (`ConsoleMissing` otherwise)
//! 2. no game may already use the title (`Conflict` otherwise)
//!
//! Titles are unique across the whole catalog, not per console. Store-level
//! constraint violations on insert map back onto the same two errors.

use tracing::{info, warn};

use crate::error::ErrorCode;
use crate::store::{CatalogStore, Game, StoreError};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("game not found: {0}")]
    NotFound(i64),
    #[error("console not found: {0}")]
    ConsoleMissing(i64),
    #[error("game already exists: {0}")]
    Conflict(String),
    #[error("game title must not be empty")]
    InvalidTitle,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ErrorCode for GameError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_GAME_NOT_FOUND",
            Self::ConsoleMissing(_) => "E_CONSOLE_MISSING",
            Self::Conflict(_) => "E_GAME_CONFLICT",
            Self::InvalidTitle => "E_INVALID_TITLE",
            Self::Store(_) => "E_DATABASE",
        }
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// List every game in insertion order.
///
/// # Errors
///
/// Returns a store error if the query fails.
pub async fn list_games(store: &dyn CatalogStore) -> Result<Vec<Game>, GameError> {
    Ok(store.list_games().await?)
}

/// Fetch one game by id. Ids outside the `i32` key range are not found.
///
/// # Errors
///
/// Returns `NotFound` if no game has this id.
pub async fn get_game(store: &dyn CatalogStore, id: i64) -> Result<Game, GameError> {
    let Ok(key) = i32::try_from(id) else {
        return Err(GameError::NotFound(id));
    };
    store.find_game(key).await?.ok_or(GameError::NotFound(id))
}

// =============================================================================
// CREATE
// =============================================================================

/// Create a game on an existing console.
///
/// # Errors
///
/// Returns `InvalidTitle` for a blank title, `ConsoleMissing` if the console
/// does not exist, and `Conflict` if the title is taken.
pub async fn create_game(store: &dyn CatalogStore, title: &str, console_id: i64) -> Result<Game, GameError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(GameError::InvalidTitle);
    }

    let Ok(console_key) = i32::try_from(console_id) else {
        warn!(console_id, "game references console id outside key range");
        return Err(GameError::ConsoleMissing(console_id));
    };
    if store.find_console(console_key).await?.is_none() {
        warn!(console_id, "game references unknown console");
        return Err(GameError::ConsoleMissing(console_id));
    }

    if store.find_game_by_title(title).await?.is_some() {
        warn!(title, "game title already taken");
        return Err(GameError::Conflict(title.to_owned()));
    }

    let game = store
        .insert_game(title, console_key)
        .await
        .map_err(|e| match e {
            StoreError::UniqueViolation(_) => GameError::Conflict(title.to_owned()),
            StoreError::ForeignKeyViolation(_) => GameError::ConsoleMissing(console_id),
            other => GameError::Store(other),
        })?;

    info!(game_id = game.id, console_id, title = %game.title, "game created");
    Ok(game)
}

#[cfg(test)]
#[path = "game_test.rs"]
mod tests;
