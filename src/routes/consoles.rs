//! Console routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::error::{ApiError, ApiJson, ApiPath};
use crate::services::console::{self, ConsoleError};
use crate::state::AppState;
use crate::store::Console;

#[derive(Deserialize)]
pub struct CreateConsoleBody {
    pub name: String,
}

/// `GET /consoles` — list all consoles.
pub async fn list_consoles(State(state): State<AppState>) -> Result<Json<Vec<Console>>, ApiError> {
    let consoles = console::list_consoles(state.store.as_ref())
        .await
        .map_err(console_error_to_api)?;
    Ok(Json(consoles))
}

/// `GET /consoles/:id` — fetch one console.
pub async fn get_console(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Console>, ApiError> {
    let console = console::get_console(state.store.as_ref(), id)
        .await
        .map_err(console_error_to_api)?;
    Ok(Json(console))
}

/// `POST /consoles` — create a console with a unique name.
pub async fn create_console(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateConsoleBody>,
) -> Result<(StatusCode, Json<Console>), ApiError> {
    let console = console::create_console(state.store.as_ref(), &body.name)
        .await
        .map_err(console_error_to_api)?;
    Ok((StatusCode::CREATED, Json(console)))
}

pub(crate) fn console_error_to_status(err: &ConsoleError) -> StatusCode {
    match err {
        ConsoleError::NotFound(_) => StatusCode::NOT_FOUND,
        ConsoleError::Conflict(_) => StatusCode::CONFLICT,
        ConsoleError::InvalidName => StatusCode::UNPROCESSABLE_ENTITY,
        ConsoleError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn console_error_to_api(err: ConsoleError) -> ApiError {
    if let ConsoleError::Store(store_err) = &err {
        tracing::error!(error = %store_err, "console store failure");
    }
    ApiError::new(console_error_to_status(&err), &err)
}

#[cfg(test)]
#[path = "consoles_test.rs"]
mod tests;
