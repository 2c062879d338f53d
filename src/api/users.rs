use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, UsernameDto};

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UsernameDto>>, ApiError> {
    let names = state.log_entries.list_names().await?;

    Ok(Json(
        names
            .into_iter()
            .map(|username| UsernameDto { username })
            .collect(),
    ))
}
