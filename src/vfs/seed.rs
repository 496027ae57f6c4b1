//! Demo-Datensatz: wird einmal beim Start gebaut und gegen die
//! Baum-Invarianten validiert.
//!
//! Timestamps are fixed offsets from a constant base so listing order,
//! "recent files" and the dashboard stay deterministic across runs.

use chrono::{DateTime, Utc};

use super::{FileRecord, Folder, Vfs, VfsError, ROOT_ID};

/// 2025-08-01T12:53:20Z, the reference point for all seeded timestamps.
const BASE_SECS: i64 = 1_754_052_800;

const HOUR: i64 = 3600;
const DAY: i64 = 24 * HOUR;

fn ts(secs_before_base: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(BASE_SECS - secs_before_base, 0).unwrap_or_default()
}

fn folder(id: &str, name: &str, parent: Option<&str>, children: &[&str], path: &str) -> Folder {
    Folder {
        id: id.to_string(),
        name: name.to_string(),
        parent: parent.map(str::to_string),
        children: children.iter().map(|c| c.to_string()).collect(),
        path: path.to_string(),
    }
}

fn file(id: &str, name: &str, size: u64, age: i64, parent: &str) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        size,
        last_modified: ts(age),
        parent: parent.to_string(),
    }
}

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

/// Builds the demo filesystem. Fails only if the literals below violate the
/// tree invariants, which the vfs tests guard against.
pub fn demo() -> Result<Vfs, VfsError> {
    let folders = vec![
        folder(ROOT_ID, "My Drive", None, &["design", "docs", "photos", "music", "videos"], ""),
        folder("design", "Design Assets", Some(ROOT_ID), &[], "Design Assets"),
        folder("docs", "Documents", Some(ROOT_ID), &["reports", "invoices"], "Documents"),
        folder("photos", "Photos", Some(ROOT_ID), &["vacation"], "Photos"),
        folder("music", "Music", Some(ROOT_ID), &[], "Music"),
        folder("videos", "Videos", Some(ROOT_ID), &[], "Videos"),
        folder("reports", "Reports", Some("docs"), &[], "Documents/Reports"),
        folder("invoices", "Invoices", Some("docs"), &[], "Documents/Invoices"),
        folder("vacation", "Vacation 2025", Some("photos"), &[], "Photos/Vacation 2025"),
    ];

    let files = vec![
        // Wurzel
        file("f01", "Project Proposal.pdf", 2 * MB + 400 * KB, 2 * HOUR, ROOT_ID),
        file("f02", "presentation.pptx", 15 * MB + 200 * KB, 3 * DAY, ROOT_ID),
        file("f03", "vacation-photo.jpg", 3 * MB + 800 * KB, 7 * DAY, ROOT_ID),
        file("f04", "notes.txt", 4 * KB, 5 * HOUR, ROOT_ID),
        file("f05", "team-photo.JPG", 5 * MB, 12 * DAY, ROOT_ID),
        file("f06", "demo-reel.mp4", 120 * MB, 9 * DAY, ROOT_ID),
        // Design Assets
        file("f07", "logo-design.ai", 892 * KB, 1 * DAY, "design"),
        file("f08", "brand-guide.pdf", 6 * MB, 4 * DAY, "design"),
        file("f09", "hero-banner.png", 2 * MB, 2 * DAY, "design"),
        file("f10", "icon-set.svg", 340 * KB, 6 * DAY, "design"),
        file("f11", "mockup.sketch", 14 * MB, 15 * DAY, "design"),
        // Documents
        file("f12", "meeting-minutes.docx", 88 * KB, 6 * HOUR, "docs"),
        file("f13", "budget-2025.xlsx", 410 * KB, 1 * DAY + 4 * HOUR, "docs"),
        file("f14", "handbook.pdf", 3 * MB + 100 * KB, 30 * DAY, "docs"),
        // Documents/Reports
        file("f15", "q1-report.pdf", 1 * MB + 200 * KB, 90 * DAY, "reports"),
        file("f16", "q2-report.pdf", 1 * MB + 350 * KB, 20 * DAY, "reports"),
        file("f17", "annual-summary.md", 36 * KB, 10 * DAY, "reports"),
        // Documents/Invoices
        file("f18", "invoice-0041.pdf", 120 * KB, 14 * DAY, "invoices"),
        file("f19", "invoice-0042.pdf", 118 * KB, 8 * DAY, "invoices"),
        // Photos
        file("f20", "sunset.png", 4 * MB + 600 * KB, 11 * DAY, "photos"),
        file("f21", "family.jpeg", 2 * MB + 900 * KB, 40 * DAY, "photos"),
        // Photos/Vacation 2025
        file("f22", "beach-day.jpg", 3 * MB + 300 * KB, 18 * DAY, "vacation"),
        file("f23", "hiking.HEIC", 2 * MB + 100 * KB, 17 * DAY, "vacation"),
        file("f24", "drone-footage.mov", 480 * MB, 16 * DAY, "vacation"),
        // Music
        file("f25", "podcast-episode.mp3", 52 * MB, 3 * DAY + 2 * HOUR, "music"),
        file("f26", "demo-track.flac", 38 * MB, 25 * DAY, "music"),
        // Videos
        file("f27", "tutorial.mp4", 210 * MB, 5 * DAY, "videos"),
        file("f28", "screen-recording.webm", 64 * MB, 1 * DAY + 7 * HOUR, "videos"),
        file("f29", "raw-capture.mkv", 710 * MB, 28 * DAY, "videos"),
        // Ohne bekannte Endung
        file("f30", "archive.tar.zst", 96 * MB, 45 * DAY, ROOT_ID),
    ];

    Vfs::new(folders, files)
}
