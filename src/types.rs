use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vfs::{Category, Entry, FileRecord, Folder, Vfs};

/// A display entry for list/grid rendering: either a folder (mirroring a
/// tree node) or a file. Derived from the tree, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryDto {
    Folder {
        id: String,
        name: String,
        path: String,
        parent: Option<String>,
        child_count: usize,
        file_count: usize,
        icon: String,
    },
    File {
        id: String,
        name: String,
        path: String,
        parent: String,
        size: u64,
        category: Category,
        icon: String,
        last_modified: DateTime<Utc>,
    },
}

impl EntryDto {
    pub fn from_entry(vfs: &Vfs, entry: Entry<'_>) -> Self {
        match entry {
            Entry::Folder(f) => EntryDto::Folder {
                id: f.id.clone(),
                name: f.name.clone(),
                path: f.path.clone(),
                parent: f.parent.clone(),
                child_count: f.children.len(),
                file_count: vfs.file_count_in(&f.id),
                icon: "📁".to_string(),
            },
            Entry::File(f) => Self::from_file(vfs, f),
        }
    }

    pub fn from_file(vfs: &Vfs, file: &FileRecord) -> Self {
        let category = file.category();
        EntryDto::File {
            id: file.id.clone(),
            name: file.name.clone(),
            path: file_path(vfs, file),
            parent: file.parent.clone(),
            size: file.size,
            category,
            icon: category.icon().to_string(),
            last_modified: file.last_modified,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EntryDto::Folder { name, .. } => name,
            EntryDto::File { name, .. } => name,
        }
    }
}

/// Slash-joined display path of a file, derived from its folder's path.
fn file_path(vfs: &Vfs, file: &FileRecord) -> String {
    match vfs.folder(&file.parent) {
        Some(folder) if !folder.path.is_empty() => format!("{}/{}", folder.path, file.name),
        _ => file.name.clone(),
    }
}

/// A folder node as exposed to the sidebar tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderDto {
    pub id: String,
    pub name: String,
    pub parent: Option<String>,
    pub children: Vec<String>,
    pub path: String,
}

impl From<&Folder> for FolderDto {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id.clone(),
            name: f.name.clone(),
            parent: f.parent.clone(),
            children: f.children.clone(),
            path: f.path.clone(),
        }
    }
}

/// One segment of the path from root to the current folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreadcrumbDto {
    pub id: String,
    pub name: String,
    pub path: String,
}

/// Result of navigating to a folder by id or path. `resolved` is false when
/// the target did not exist and the navigation fell back to the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationDto {
    pub folder: FolderDto,
    pub breadcrumbs: Vec<BreadcrumbDto>,
    pub resolved: bool,
}

/// One page of a filtered folder listing. `folder_id` names the folder that
/// was actually listed (the root when the requested id fell back).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingPage {
    pub folder_id: String,
    pub resolved: bool,
    pub items: Vec<EntryDto>,
    pub total_count: usize,
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

/// One page of global search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub items: Vec<EntryDto>,
    pub total_count: usize,
    pub query: String,
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ---------------------- Auth DTOs ----------------------

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    // Das Demo-Frontend schickt camelCase.
    #[serde(alias = "refreshToken")]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileDto {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl From<&crate::auth::DemoUser> for UserProfileDto {
    fn from(u: &crate::auth::DemoUser) -> Self {
        Self {
            id: u.id,
            email: u.email.clone(),
            name: u.name.clone(),
            role: u.role.clone(),
            avatar: u.avatar.clone(),
        }
    }
}

// ---------------------- Mutation stubs ----------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFolderRequest {
    pub name: String,
    /// Defaults to the root folder.
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    pub name: String,
    pub size: u64,
    /// Defaults to the root folder.
    pub parent: Option<String>,
}

/// Acknowledgement for the demo mutations. Nothing is persisted; the
/// operation is validated, logged, and echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationAck {
    pub operation: String,
    pub target: String,
    pub persisted: bool,
}

impl OperationAck {
    pub fn new(operation: &str, target: impl Into<String>) -> Self {
        Self { operation: operation.to_string(), target: target.into(), persisted: false }
    }
}

// ---------------------- Dashboard DTOs ----------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub files: usize,
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_files: usize,
    pub total_folders: usize,
    pub total_bytes: u64,
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendRange {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

/// One bar of the mocked upload-trend chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub images: u64,
    pub documents: u64,
    pub videos: u64,
    pub others: u64,
}
