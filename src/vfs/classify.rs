//! Ableitung der Datei-Kategorie aus der Dateiendung.
//!
//! The category of a file is never stored; it is derived from the name's
//! extension via a fixed table, case-insensitively.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display category of a file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pictures,
    Videos,
    Documents,
    Music,
    Other,
}

impl Category {
    /// All categories in display order (used for dashboard breakdowns).
    pub const ALL: [Category; 5] =
        [Category::Pictures, Category::Videos, Category::Documents, Category::Music, Category::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pictures => "pictures",
            Category::Videos => "videos",
            Category::Documents => "documents",
            Category::Music => "music",
            Category::Other => "other",
        }
    }

    /// Icon shown by list/grid renderers for files of this category.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Pictures => "🖼️",
            Category::Videos => "🎬",
            Category::Documents => "📄",
            Category::Music => "🎵",
            Category::Other => "📦",
        }
    }
}

/// Category filter as received from the query string. `All` passes every
/// entry; folder entries are exempt from category filtering altogether.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Pictures,
    Videos,
    Documents,
    Music,
    Other,
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Pictures => category == Category::Pictures,
            CategoryFilter::Videos => category == Category::Videos,
            CategoryFilter::Documents => category == Category::Documents,
            CategoryFilter::Music => category == Category::Music,
            CategoryFilter::Other => category == Category::Other,
        }
    }
}

lazy_static! {
    static ref EXTENSION_TABLE: HashMap<&'static str, Category> = {
        let mut m = HashMap::new();
        for ext in ["jpg", "jpeg", "png", "gif", "webp", "svg", "bmp", "tiff", "heic"] {
            m.insert(ext, Category::Pictures);
        }
        for ext in ["mp4", "mov", "avi", "mkv", "webm", "wmv", "m4v"] {
            m.insert(ext, Category::Videos);
        }
        for ext in
            ["pdf", "doc", "docx", "txt", "md", "rtf", "ppt", "pptx", "xls", "xlsx", "csv", "odt"]
        {
            m.insert(ext, Category::Documents);
        }
        for ext in ["mp3", "wav", "flac", "ogg", "m4a", "aac", "aiff"] {
            m.insert(ext, Category::Music);
        }
        m
    };
}

/// Classify a file name by its extension. Unmatched or missing extensions
/// map to [`Category::Other`]. The match is case-insensitive, so `photo.JPG`
/// counts as a picture.
pub fn classify(name: &str) -> Category {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            let ext = ext.to_ascii_lowercase();
            EXTENSION_TABLE.get(ext.as_str()).copied().unwrap_or(Category::Other)
        }
        _ => Category::Other,
    }
}
