use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{validation, AppResult},
    middleware::ip::extract_ip_from_headers,
    state::AppState,
    types::{EntryDto, SearchResult},
    vfs::CategoryFilter,
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filter: Option<CategoryFilter>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// GET /search - global search across all folders.
///
/// An empty query matches everything, mirroring the listing semantics:
/// emptying the query may only ever widen the result set.
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(q): Query<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    // Per-endpoint rate limit: "/search"
    let ip = extract_ip_from_headers(&headers, None);
    if let Err((status, body)) = state.rate_limiter.check_endpoint_limit("/search", ip).await {
        return Ok((status, body).into_response());
    }

    let ms = state.config.listing.simulated_latency_ms;
    if ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }

    let query = validation::sanitize_query(&q.query)?;
    let filter = q.filter.unwrap_or_default();
    let limit = q
        .limit
        .unwrap_or(state.config.listing.page_size)
        .clamp(1, state.config.listing.max_page_size);
    let offset = q.offset.unwrap_or(0).min(10_000);

    let vfs = &state.vfs;
    let matches = vfs.search(&query, filter);
    let total_count = matches.len();
    let items: Vec<EntryDto> = matches
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|e| EntryDto::from_entry(vfs, e))
        .collect();
    let has_more = offset + items.len() < total_count;

    state.metrics.inc_searches_served();

    Ok(Json(SearchResult { items, total_count, query, offset, limit, has_more }).into_response())
}
