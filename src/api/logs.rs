use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use std::sync::Arc;
use tracing::debug;

use super::{
    ApiError, AppState, ChangesResponse, CreatedResponse, LogPageResponse, LogsQuery,
    validation::validate_entry_id,
};
use crate::domain::{EntryId, PageRequest};
use crate::models::LogEntryDraft;

pub async fn list_logs(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<LogPageResponse>, ApiError> {
    // Paging input is never an error; unreadable queries fall back to defaults.
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_else(|rejection| {
        debug!(reason = %rejection.body_text(), "Ignoring unreadable query string");
        Vec::new()
    });
    let query = LogsQuery::from_pairs(pairs);

    let request = PageRequest::from_query(
        query.page.as_deref(),
        query.limit.as_deref(),
        state.default_limit(),
    );

    let page = state.log_entries.list_page(request).await?;
    Ok(Json(page.into()))
}

pub async fn create_log(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LogEntryDraft>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(draft) = body?;

    let id = state.log_entries.create(draft).await?;
    Ok(Json(CreatedResponse { id: id.value() }))
}

pub async fn update_log(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<LogEntryDraft>, JsonRejection>,
) -> Result<Json<ChangesResponse>, ApiError> {
    let id = entry_id(path)?;
    let Json(draft) = body?;

    let changes = state.log_entries.update(id, draft).await?;
    Ok(Json(ChangesResponse { changes }))
}

pub async fn delete_log(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ChangesResponse>, ApiError> {
    let id = entry_id(path)?;

    let changes = state.log_entries.soft_delete(id).await?;
    Ok(Json(ChangesResponse { changes }))
}

fn entry_id(path: Result<Path<String>, PathRejection>) -> Result<EntryId, ApiError> {
    let Path(raw_id) = path?;
    validate_entry_id(&raw_id)
}
