use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    state::AppState,
    types::{CategoryCount, DashboardSummary, EntryDto, TrendPoint, TrendRange},
    vfs::Category,
};

/// GET /dashboard/summary - live totals derived from the virtual filesystem.
pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let vfs = &state.vfs;
    let categories = Category::ALL
        .iter()
        .map(|&category| {
            let mut files = 0usize;
            let mut bytes = 0u64;
            for f in vfs.files().iter().filter(|f| f.category() == category) {
                files += 1;
                bytes += f.size;
            }
            CategoryCount { category, files, bytes }
        })
        .collect();

    Json(DashboardSummary {
        total_files: vfs.files().len(),
        // Der Root-Ordner zählt nicht als Eintrag.
        total_folders: vfs.folder_count().saturating_sub(1),
        total_bytes: vfs.files().iter().map(|f| f.size).sum(),
        categories,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct TrendQuery {
    #[serde(default)]
    pub range: Option<TrendRange>,
}

fn point(label: &str, images: u64, documents: u64, videos: u64, others: u64) -> TrendPoint {
    TrendPoint { label: label.to_string(), images, documents, videos, others }
}

/// GET /dashboard/trends?range= - mocked upload-trend series for the chart.
/// Static data: uploads are stubs, so there is nothing real to aggregate.
pub async fn trends(Query(q): Query<TrendQuery>) -> Json<Vec<TrendPoint>> {
    let series = match q.range.unwrap_or_default() {
        TrendRange::Daily => vec![
            point("Mon", 12, 8, 2, 3),
            point("Tue", 9, 11, 1, 2),
            point("Wed", 15, 6, 4, 1),
            point("Thu", 7, 14, 2, 5),
            point("Fri", 18, 9, 3, 2),
            point("Sat", 22, 3, 6, 4),
            point("Sun", 16, 2, 5, 3),
        ],
        TrendRange::Weekly => vec![
            point("W1", 64, 48, 12, 18),
            point("W2", 72, 53, 9, 14),
            point("W3", 58, 61, 15, 11),
            point("W4", 81, 44, 18, 21),
        ],
        TrendRange::Monthly => vec![
            point("Mar", 240, 190, 45, 60),
            point("Apr", 265, 172, 52, 48),
            point("May", 228, 204, 39, 55),
            point("Jun", 291, 185, 61, 49),
            point("Jul", 312, 198, 58, 66),
            point("Aug", 176, 121, 33, 29),
        ],
    };
    Json(series)
}

#[derive(Debug, Default, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

/// GET /dashboard/recent?limit= - most recently modified files, newest first.
pub async fn recent(
    State(state): State<AppState>,
    Query(q): Query<RecentQuery>,
) -> Json<Vec<EntryDto>> {
    let vfs = &state.vfs;
    let limit = q.limit.unwrap_or(5).clamp(1, state.config.listing.max_page_size);
    let items =
        vfs.recent_files(limit).into_iter().map(|f| EntryDto::from_file(vfs, f)).collect();
    Json(items)
}
