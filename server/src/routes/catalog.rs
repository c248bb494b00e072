//! Catalog routes — category menu proxy.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use shared::MenuEntry;

use crate::services::catalog as catalog_svc;
use crate::state::AppState;

/// `GET /api/catalog/menu` — current category tree from the commerce backend.
///
/// Fetched fresh per request; upstream failures map to 502.
pub async fn menu(State(state): State<AppState>) -> Result<Json<Vec<MenuEntry>>, StatusCode> {
    match catalog_svc::fetch_menu(&state.http, &state.commerce).await {
        Ok(entries) => Ok(Json(entries)),
        Err(e) => {
            tracing::error!(error = %e, "menu fetch failed");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
