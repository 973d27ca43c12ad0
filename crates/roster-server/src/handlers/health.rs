//! Health probe

use crate::AppState;
use axum::{extract::State, Json};
use roster_types::HealthBody;

/// Reports the active backend without touching it
pub async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_string(),
        backend: state.users.backend_kind().to_string(),
    })
}
