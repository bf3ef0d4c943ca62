//! Placeholder listing API handler.

use axum::{Json, extract::State};
use std::sync::Arc;

use crate::template::Placeholder;

use super::super::state::AppState;

/// GET /api/placeholders - List the sample substitution table.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Placeholder>> {
    Json(state.samples.placeholders())
}
