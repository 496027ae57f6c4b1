//! Virtueller Verzeichnisbaum: Datenmodell, Invarianten und Abfragen.
//!
//! The tree is modeled exactly once: folders live in a parent-pointer
//! hierarchy rooted at [`ROOT_ID`], files reference their containing folder
//! by id. Display entries (the uniform file/folder rows the UI consumes) are
//! derived on demand instead of being stored redundantly alongside the tree.
//!
//! The dataset is built once at startup from [`seed`] and is immutable
//! afterwards; all query methods borrow from it.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

pub mod classify;
pub mod seed;

pub use classify::{classify, Category, CategoryFilter};

/// Id of the single root folder.
pub const ROOT_ID: &str = "root";

/// A folder node in the virtual tree.
#[derive(Debug, Clone)]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// `None` only for the root folder.
    pub parent: Option<String>,
    /// Child folder ids, in tree order.
    pub children: Vec<String>,
    /// Slash-joined chain of ancestor names. Root has the empty path.
    pub path: String,
}

/// A file leaf. Category and icon are derived from the name, never stored.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    /// Id of the containing folder.
    pub parent: String,
}

impl FileRecord {
    pub fn category(&self) -> Category {
        classify(&self.name)
    }
}

/// A derived display entry: either a folder (mirroring a tree node) or a file.
#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    Folder(&'a Folder),
    File(&'a FileRecord),
}

impl<'a> Entry<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Entry::Folder(f) => &f.id,
            Entry::File(f) => &f.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Entry::Folder(f) => &f.name,
            Entry::File(f) => &f.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }

    /// Case-insensitive substring match. `query` must already be lowercased.
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.name().to_lowercase().contains(query)
    }

    /// Folders are exempt from category filtering; files must match.
    pub fn matches_filter(&self, filter: CategoryFilter) -> bool {
        match self {
            Entry::Folder(_) => true,
            Entry::File(f) => filter.matches(f.category()),
        }
    }
}

/// Errors raised when the seeded dataset violates the tree invariants.
#[derive(Debug, Error)]
pub enum VfsError {
    #[error("duplicate folder id '{0}'")]
    DuplicateFolder(String),
    #[error("duplicate file id '{0}'")]
    DuplicateFile(String),
    #[error("expected a single root folder with id 'root' and empty path")]
    MissingRoot,
    #[error("folder '{id}' references missing parent '{parent}'")]
    MissingParent { id: String, parent: String },
    #[error("folder '{id}' has path '{actual}', expected '{expected}'")]
    PathMismatch { id: String, actual: String, expected: String },
    #[error("folder '{id}' declares children {declared:?} but tree order is {derived:?}")]
    ChildrenMismatch { id: String, declared: Vec<String>, derived: Vec<String> },
    #[error("file '{id}' references missing folder '{parent}'")]
    OrphanFile { id: String, parent: String },
}

/// The immutable in-memory filesystem.
#[derive(Debug)]
pub struct Vfs {
    folders: HashMap<String, Folder>,
    /// Folder ids in dataset order, for deterministic iteration.
    folder_order: Vec<String>,
    /// Files in dataset order. Listing order is derived from this, so
    /// re-filtering never reorders.
    files: Vec<FileRecord>,
}

impl Vfs {
    /// Builds a filesystem from raw folder and file lists, verifying every
    /// tree invariant. Construction fails on the first violation.
    pub fn new(folder_list: Vec<Folder>, files: Vec<FileRecord>) -> Result<Self, VfsError> {
        let mut folders: HashMap<String, Folder> = HashMap::with_capacity(folder_list.len());
        let mut folder_order: Vec<String> = Vec::with_capacity(folder_list.len());
        for f in folder_list {
            if folders.contains_key(&f.id) {
                return Err(VfsError::DuplicateFolder(f.id));
            }
            folder_order.push(f.id.clone());
            folders.insert(f.id.clone(), f);
        }

        // Single root with the fixed id and the empty path.
        match folders.get(ROOT_ID) {
            Some(root) if root.parent.is_none() && root.path.is_empty() => {}
            _ => return Err(VfsError::MissingRoot),
        }
        if folders.values().filter(|f| f.parent.is_none()).count() != 1 {
            return Err(VfsError::MissingRoot);
        }

        // Parent links and path consistency.
        for id in &folder_order {
            let f = &folders[id];
            if let Some(parent_id) = &f.parent {
                let parent = folders.get(parent_id).ok_or_else(|| VfsError::MissingParent {
                    id: f.id.clone(),
                    parent: parent_id.clone(),
                })?;
                let expected = if parent.path.is_empty() {
                    f.name.clone()
                } else {
                    format!("{}/{}", parent.path, f.name)
                };
                if f.path != expected {
                    return Err(VfsError::PathMismatch {
                        id: f.id.clone(),
                        actual: f.path.clone(),
                        expected,
                    });
                }
            }
        }

        // Declared children must equal the child set derived from parent
        // pointers, in dataset order.
        let mut derived: HashMap<String, Vec<String>> = HashMap::new();
        for id in &folder_order {
            if let Some(parent_id) = &folders[id].parent {
                derived.entry(parent_id.clone()).or_default().push(id.clone());
            }
        }
        for id in &folder_order {
            let f = &folders[id];
            let derived_children = derived.get(id).cloned().unwrap_or_default();
            if f.children != derived_children {
                return Err(VfsError::ChildrenMismatch {
                    id: f.id.clone(),
                    declared: f.children.clone(),
                    derived: derived_children,
                });
            }
        }

        // Files must point at existing folders and carry unique ids.
        let mut seen = std::collections::HashSet::new();
        for file in &files {
            if !seen.insert(file.id.clone()) {
                return Err(VfsError::DuplicateFile(file.id.clone()));
            }
            if !folders.contains_key(&file.parent) {
                return Err(VfsError::OrphanFile {
                    id: file.id.clone(),
                    parent: file.parent.clone(),
                });
            }
        }

        Ok(Self { folders, folder_order, files })
    }

    pub fn root(&self) -> &Folder {
        // Invariant: verified in `new`.
        &self.folders[ROOT_ID]
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.get(id)
    }

    /// All folders in dataset order.
    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.folder_order.iter().map(|id| &self.folders[id])
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn file(&self, id: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Looks up an id that may denote either a folder or a file.
    pub fn entry(&self, id: &str) -> Option<Entry<'_>> {
        if let Some(f) = self.folders.get(id) {
            return Some(Entry::Folder(f));
        }
        self.file(id).map(Entry::File)
    }

    /// Resolves a slash-joined path to a folder. The empty path (or any
    /// run of slashes) denotes the root. Matching is exact on the stored
    /// path string.
    pub fn resolve_path(&self, path: &str) -> Option<&Folder> {
        let normalized = path.trim_matches('/');
        if normalized.is_empty() {
            return Some(self.root());
        }
        self.folders.values().find(|f| f.path == normalized)
    }

    /// Ordered chain of folders from the root to `id` (inclusive). Returns
    /// `None` for unknown ids.
    pub fn breadcrumbs(&self, id: &str) -> Option<Vec<&Folder>> {
        let mut chain = Vec::new();
        let mut current = self.folders.get(id)?;
        loop {
            chain.push(current);
            match &current.parent {
                Some(parent_id) => {
                    // Invariant: parent links are verified in `new`.
                    current = self.folders.get(parent_id)?;
                }
                None => break,
            }
        }
        chain.reverse();
        Some(chain)
    }

    /// The full (unfiltered) listing of a folder: child folders in tree
    /// order, then files in dataset order.
    pub fn entries(&self, folder_id: &str) -> Vec<Entry<'_>> {
        let mut out = Vec::new();
        if let Some(folder) = self.folders.get(folder_id) {
            for child_id in &folder.children {
                out.push(Entry::Folder(&self.folders[child_id]));
            }
        }
        out.extend(self.files.iter().filter(|f| f.parent == folder_id).map(Entry::File));
        out
    }

    /// Listing of a folder restricted by query and category filter. The
    /// query is matched case-insensitively as a substring of the name.
    pub fn filtered_entries(
        &self,
        folder_id: &str,
        query: &str,
        filter: CategoryFilter,
    ) -> Vec<Entry<'_>> {
        let query = query.to_lowercase();
        self.entries(folder_id)
            .into_iter()
            .filter(|e| e.matches_query(&query) && e.matches_filter(filter))
            .collect()
    }

    /// Global search across all folders, in the same deterministic order as
    /// listings: folders (root excluded) in dataset order, then files.
    pub fn search(&self, query: &str, filter: CategoryFilter) -> Vec<Entry<'_>> {
        let query = query.to_lowercase();
        let mut out: Vec<Entry<'_>> = Vec::new();
        out.extend(
            self.folders()
                .filter(|f| f.id != ROOT_ID)
                .map(Entry::Folder)
                .filter(|e| e.matches_query(&query) && e.matches_filter(filter)),
        );
        out.extend(
            self.files
                .iter()
                .map(Entry::File)
                .filter(|e| e.matches_query(&query) && e.matches_filter(filter)),
        );
        out
    }

    /// Number of files directly inside `folder_id`.
    pub fn file_count_in(&self, folder_id: &str) -> usize {
        self.files.iter().filter(|f| f.parent == folder_id).count()
    }

    /// Most recently modified files, newest first. Ties keep dataset order.
    pub fn recent_files(&self, limit: usize) -> Vec<&FileRecord> {
        let mut files: Vec<&FileRecord> = self.files.iter().collect();
        files.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        files.truncate(limit);
        files
    }
}
