use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{validation, AppError, AppResult, OptionExt},
    state::AppState,
    types::{BreadcrumbDto, CreateFolderRequest, FolderDto, NavigationDto, OperationAck},
    vfs::{Folder, Vfs, ROOT_ID},
};

/// GET /folders - the full folder tree for the sidebar, in dataset order.
pub async fn tree(State(state): State<AppState>) -> Json<Vec<FolderDto>> {
    Json(state.vfs.folders().map(FolderDto::from).collect())
}

fn navigation(vfs: &Vfs, folder: &Folder, resolved: bool) -> NavigationDto {
    // Invariant: breadcrumbs exist for every folder that passed validation.
    let breadcrumbs = vfs
        .breadcrumbs(&folder.id)
        .unwrap_or_default()
        .into_iter()
        .map(|f| BreadcrumbDto { id: f.id.clone(), name: f.name.clone(), path: f.path.clone() })
        .collect();
    NavigationDto { folder: FolderDto::from(folder), breadcrumbs, resolved }
}

/// GET /folders/{id} - navigate by folder id.
///
/// Unknown ids land at the root with `resolved: false` instead of failing,
/// so stale links keep working while the fallback stays visible to the
/// client and the log.
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<NavigationDto> {
    let vfs = &state.vfs;
    match vfs.folder(&id) {
        Some(folder) => Json(navigation(vfs, folder, true)),
        None => {
            tracing::warn!(folder_id = %id, "navigation target not found, falling back to root");
            Json(navigation(vfs, vfs.root(), false))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ResolveQuery {
    pub path: Option<String>,
}

/// GET /folders/resolve?path=a/b/c - navigate by path string. Same fallback
/// semantics as navigation by id.
pub async fn resolve(
    State(state): State<AppState>,
    Query(q): Query<ResolveQuery>,
) -> Json<NavigationDto> {
    let vfs = &state.vfs;
    let path = q.path.unwrap_or_default();
    match vfs.resolve_path(&path) {
        Some(folder) => Json(navigation(vfs, folder, true)),
        None => {
            tracing::warn!(%path, "path did not resolve, falling back to root");
            Json(navigation(vfs, vfs.root(), false))
        }
    }
}

/// POST /folders - create-folder stub.
///
/// The dataset is immutable; the request is validated, logged, and
/// acknowledged without being persisted.
pub async fn create_folder(
    State(state): State<AppState>,
    Json(req): Json<CreateFolderRequest>,
) -> AppResult<impl IntoResponse> {
    validation::validate_name(&req.name)?;
    let parent_id = req.parent.as_deref().unwrap_or(ROOT_ID);
    let parent = state.vfs.folder(parent_id).ok_or_not_found("parent folder")?;
    if parent.children.iter().any(|c| {
        state.vfs.folder(c).map(|f| f.name.eq_ignore_ascii_case(req.name.trim())).unwrap_or(false)
    }) {
        return Err(AppError::BadRequest(format!(
            "folder '{}' already exists in '{}'",
            req.name.trim(),
            parent.name
        )));
    }
    tracing::info!(name = %req.name.trim(), parent = %parent.id, "create folder requested (not persisted)");
    Ok((StatusCode::ACCEPTED, Json(OperationAck::new("create_folder", req.name.trim()))))
}
