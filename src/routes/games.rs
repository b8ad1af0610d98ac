//! Game routes.
//!
//! A create that names a missing console answers 409, the same status as a
//! duplicate title. Clients tell the two apart by the `error` code
//! (`E_CONSOLE_MISSING` vs `E_GAME_CONFLICT`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::error::{ApiError, ApiJson, ApiPath};
use crate::services::game::{self, GameError};
use crate::state::AppState;
use crate::store::Game;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameBody {
    pub title: String,
    pub console_id: i64,
}

/// `GET /games` — list all games.
pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<Game>>, ApiError> {
    let games = game::list_games(state.store.as_ref())
        .await
        .map_err(game_error_to_api)?;
    Ok(Json(games))
}

/// `GET /games/:id` — fetch one game.
pub async fn get_game(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Game>, ApiError> {
    let game = game::get_game(state.store.as_ref(), id)
        .await
        .map_err(game_error_to_api)?;
    Ok(Json(game))
}

/// `POST /games` — create a game on an existing console.
pub async fn create_game(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateGameBody>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let game = game::create_game(state.store.as_ref(), &body.title, body.console_id)
        .await
        .map_err(game_error_to_api)?;
    Ok((StatusCode::CREATED, Json(game)))
}

pub(crate) fn game_error_to_status(err: &GameError) -> StatusCode {
    match err {
        GameError::NotFound(_) => StatusCode::NOT_FOUND,
        GameError::ConsoleMissing(_) | GameError::Conflict(_) => StatusCode::CONFLICT,
        GameError::InvalidTitle => StatusCode::UNPROCESSABLE_ENTITY,
        GameError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn game_error_to_api(err: GameError) -> ApiError {
    if let GameError::Store(store_err) = &err {
        tracing::error!(error = %store_err, "game store failure");
    }
    ApiError::new(game_error_to_status(&err), &err)
}

#[cfg(test)]
#[path = "games_test.rs"]
mod tests;
