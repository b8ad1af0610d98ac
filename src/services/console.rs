//! Console service — list, get, and create with name uniqueness.
//!
//! DESIGN
//! ======
//! `create_console` checks for an existing console with the same name before
//! inserting. Two concurrent creates can both pass that check; the store's
//! unique constraint then rejects the loser, which is reported as the same
//! `Conflict` a pre-check hit would produce.

use tracing::{info, warn};

use crate::error::ErrorCode;
use crate::store::{CatalogStore, Console, StoreError};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("console not found: {0}")]
    NotFound(i64),
    #[error("console already exists: {0}")]
    Conflict(String),
    #[error("console name must not be empty")]
    InvalidName,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ErrorCode for ConsoleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_CONSOLE_NOT_FOUND",
            Self::Conflict(_) => "E_CONSOLE_CONFLICT",
            Self::InvalidName => "E_INVALID_NAME",
            Self::Store(_) => "E_DATABASE",
        }
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// List every console in insertion order.
///
/// # Errors
///
/// Returns a store error if the query fails.
pub async fn list_consoles(store: &dyn CatalogStore) -> Result<Vec<Console>, ConsoleError> {
    Ok(store.list_consoles().await?)
}

/// Fetch one console by id. Ids outside the `i32` key range cannot name a
/// row and are reported as not found.
///
/// # Errors
///
/// Returns `NotFound` if no console has this id.
pub async fn get_console(store: &dyn CatalogStore, id: i64) -> Result<Console, ConsoleError> {
    let Ok(key) = i32::try_from(id) else {
        return Err(ConsoleError::NotFound(id));
    };
    store.find_console(key).await?.ok_or(ConsoleError::NotFound(id))
}

// =============================================================================
// CREATE
// =============================================================================

/// Create a console after checking that its name is free.
///
/// # Errors
///
/// Returns `InvalidName` for a blank name and `Conflict` if the name is taken.
pub async fn create_console(store: &dyn CatalogStore, name: &str) -> Result<Console, ConsoleError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ConsoleError::InvalidName);
    }

    if store.find_console_by_name(name).await?.is_some() {
        warn!(name, "console name already taken");
        return Err(ConsoleError::Conflict(name.to_owned()));
    }

    let console = store.insert_console(name).await.map_err(|e| match e {
        StoreError::UniqueViolation(_) => ConsoleError::Conflict(name.to_owned()),
        other => ConsoleError::Store(other),
    })?;

    info!(console_id = console.id, name = %console.name, "console created");
    Ok(console)
}

#[cfg(test)]
#[path = "console_test.rs"]
mod tests;
