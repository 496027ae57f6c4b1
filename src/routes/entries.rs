use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::{validation, AppResult, OptionExt},
    state::AppState,
    types::{EntryDto, ListingPage, OperationAck, RenameRequest, UploadRequest},
    vfs::{CategoryFilter, ROOT_ID},
};

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub filter: Option<CategoryFilter>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Simulated network delay, carried over from the demo frontend's fake
/// latency for search and load-more. Disabled when configured to 0.
async fn simulated_latency(state: &AppState) {
    let ms = state.config.listing.simulated_latency_ms;
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// GET /folders/{id}/entries - one page of the filtered folder listing.
///
/// A "load more" client walks this with a growing offset; the slicing is
/// stateless per request, so the union of all pages is exactly the filtered
/// set in deterministic order. Unknown folder ids fall back to the root,
/// surfaced via `resolved: false`.
pub async fn list_entries(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(q): Query<ListingQuery>,
) -> AppResult<Json<ListingPage>> {
    simulated_latency(&state).await;

    let vfs = &state.vfs;
    let (folder_id, resolved) = match vfs.folder(&id) {
        Some(folder) => (folder.id.clone(), true),
        None => {
            tracing::warn!(folder_id = %id, "listing target not found, falling back to root");
            (ROOT_ID.to_string(), false)
        }
    };

    let query = validation::sanitize_query(q.query.as_deref().unwrap_or(""))?;
    let filter = q.filter.unwrap_or_default();
    let limit = q
        .limit
        .unwrap_or(state.config.listing.page_size)
        .clamp(1, state.config.listing.max_page_size);
    let offset = q.offset.unwrap_or(0);

    let filtered = vfs.filtered_entries(&folder_id, &query, filter);
    let total_count = filtered.len();
    let items: Vec<EntryDto> = filtered
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|e| EntryDto::from_entry(vfs, e))
        .collect();
    let has_more = offset + items.len() < total_count;

    state.metrics.inc_listings_served();
    state.metrics.add_entries_served(items.len() as u64);

    Ok(Json(ListingPage { folder_id, resolved, items, total_count, offset, limit, has_more }))
}

/// POST /entries/{id}/rename - rename stub. Validated and logged only; the
/// dataset stays immutable after startup.
pub async fn rename_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RenameRequest>,
) -> AppResult<impl IntoResponse> {
    validation::validate_name(&req.name)?;
    let entry = state.vfs.entry(&id).ok_or_not_found("entry")?;
    tracing::info!(
        entry_id = %id,
        from = %entry.name(),
        to = %req.name.trim(),
        "rename requested (not persisted)"
    );
    Ok((StatusCode::ACCEPTED, Json(OperationAck::new("rename", id))))
}

/// DELETE /entries/{id} - delete stub.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = state.vfs.entry(&id).ok_or_not_found("entry")?;
    tracing::info!(entry_id = %id, name = %entry.name(), "delete requested (not persisted)");
    Ok((StatusCode::ACCEPTED, Json(OperationAck::new("delete", id))))
}

/// POST /uploads - upload stub. Accepts metadata only; there is no real
/// transport or storage behind it.
pub async fn upload(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> AppResult<impl IntoResponse> {
    validation::validate_name(&req.name)?;
    let parent_id = req.parent.as_deref().unwrap_or(ROOT_ID);
    state.vfs.folder(parent_id).ok_or_not_found("parent folder")?;
    tracing::info!(
        name = %req.name.trim(),
        size = req.size,
        parent = %parent_id,
        "upload requested (not persisted)"
    );
    Ok((StatusCode::ACCEPTED, Json(OperationAck::new("upload", req.name.trim()))))
}
