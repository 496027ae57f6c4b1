#[cfg(test)]
mod tests {
    use crate::vfs::{
        classify, seed, Category, CategoryFilter, Entry, FileRecord, Folder, Vfs, VfsError,
        ROOT_ID,
    };
    use chrono::{DateTime, Utc};

    fn folder(id: &str, name: &str, parent: Option<&str>, children: &[&str], path: &str) -> Folder {
        Folder {
            id: id.to_string(),
            name: name.to_string(),
            parent: parent.map(str::to_string),
            children: children.iter().map(|c| c.to_string()).collect(),
            path: path.to_string(),
        }
    }

    fn file(id: &str, name: &str, parent: &str) -> FileRecord {
        FileRecord {
            id: id.to_string(),
            name: name.to_string(),
            size: 1024,
            last_modified: DateTime::<Utc>::from_timestamp(1_754_000_000, 0).unwrap(),
            parent: parent.to_string(),
        }
    }

    fn tiny_tree() -> Vec<Folder> {
        vec![
            folder(ROOT_ID, "My Drive", None, &["a"], ""),
            folder("a", "Alpha", Some(ROOT_ID), &[], "Alpha"),
        ]
    }

    #[test]
    fn test_seed_satisfies_invariants() {
        let vfs = seed::demo().expect("seed dataset must build");
        assert_eq!(vfs.folder_count(), 9);
        assert_eq!(vfs.files().len(), 30);
        assert_eq!(vfs.root().id, ROOT_ID);
        assert_eq!(vfs.root().path, "");
    }

    #[test]
    fn test_duplicate_folder_id_rejected() {
        let mut folders = tiny_tree();
        folders.push(folder("a", "Alpha Again", Some(ROOT_ID), &[], "Alpha Again"));
        let err = Vfs::new(folders, vec![]).unwrap_err();
        assert!(matches!(err, VfsError::DuplicateFolder(id) if id == "a"));
    }

    #[test]
    fn test_missing_root_rejected() {
        let folders = vec![
            folder("top", "Top", None, &["a"], ""),
            folder("a", "Alpha", Some("top"), &[], "Alpha"),
        ];
        assert!(matches!(Vfs::new(folders, vec![]).unwrap_err(), VfsError::MissingRoot));

        // A root with a non-empty path is just as invalid.
        let folders = vec![folder(ROOT_ID, "My Drive", None, &[], "My Drive")];
        assert!(matches!(Vfs::new(folders, vec![]).unwrap_err(), VfsError::MissingRoot));

        // Two parentless folders: there must be exactly one root.
        let folders = vec![
            folder(ROOT_ID, "My Drive", None, &[], ""),
            folder("stray", "Stray", None, &[], ""),
        ];
        assert!(matches!(Vfs::new(folders, vec![]).unwrap_err(), VfsError::MissingRoot));
    }

    #[test]
    fn test_missing_parent_rejected() {
        let folders = vec![
            folder(ROOT_ID, "My Drive", None, &[], ""),
            folder("a", "Alpha", Some("ghost"), &[], "Alpha"),
        ];
        let err = Vfs::new(folders, vec![]).unwrap_err();
        assert!(matches!(err, VfsError::MissingParent { parent, .. } if parent == "ghost"));
    }

    #[test]
    fn test_path_mismatch_rejected() {
        let folders = vec![
            folder(ROOT_ID, "My Drive", None, &["a"], ""),
            folder("a", "Alpha", Some(ROOT_ID), &[], "Wrong/Alpha"),
        ];
        let err = Vfs::new(folders, vec![]).unwrap_err();
        assert!(matches!(err, VfsError::PathMismatch { expected, .. } if expected == "Alpha"));
    }

    #[test]
    fn test_children_mismatch_rejected() {
        // Root declares no children although "a" points at it.
        let folders = vec![
            folder(ROOT_ID, "My Drive", None, &[], ""),
            folder("a", "Alpha", Some(ROOT_ID), &[], "Alpha"),
        ];
        let err = Vfs::new(folders, vec![]).unwrap_err();
        assert!(matches!(err, VfsError::ChildrenMismatch { id, .. } if id == ROOT_ID));
    }

    #[test]
    fn test_orphan_and_duplicate_files_rejected() {
        let err = Vfs::new(tiny_tree(), vec![file("f1", "x.txt", "nowhere")]).unwrap_err();
        assert!(matches!(err, VfsError::OrphanFile { parent, .. } if parent == "nowhere"));

        let files = vec![file("f1", "x.txt", "a"), file("f1", "y.txt", "a")];
        let err = Vfs::new(tiny_tree(), files).unwrap_err();
        assert!(matches!(err, VfsError::DuplicateFile(id) if id == "f1"));
    }

    #[test]
    fn test_entry_lookup_by_id() {
        let vfs = seed::demo().unwrap();
        assert!(matches!(vfs.entry("docs"), Some(Entry::Folder(f)) if f.name == "Documents"));
        assert!(matches!(vfs.entry("f01"), Some(Entry::File(f)) if f.name == "Project Proposal.pdf"));
        assert!(vfs.entry("no-such-id").is_none());
    }

    #[test]
    fn test_resolve_path() {
        let vfs = seed::demo().unwrap();
        assert_eq!(vfs.resolve_path("").unwrap().id, ROOT_ID);
        assert_eq!(vfs.resolve_path("/").unwrap().id, ROOT_ID);
        assert_eq!(vfs.resolve_path("Documents").unwrap().id, "docs");
        assert_eq!(vfs.resolve_path("/Documents/Reports/").unwrap().id, "reports");
        assert_eq!(vfs.resolve_path("Photos/Vacation 2025").unwrap().id, "vacation");
        assert!(vfs.resolve_path("Dokumente").is_none());
        // Matching is exact, not case-insensitive.
        assert!(vfs.resolve_path("documents").is_none());
    }

    #[test]
    fn test_breadcrumbs_mirror_the_path() {
        let vfs = seed::demo().unwrap();
        for f in vfs.folders() {
            let chain = vfs.breadcrumbs(&f.id).expect("every folder has breadcrumbs");
            assert_eq!(chain.first().map(|f| f.id.as_str()), Some(ROOT_ID));
            assert_eq!(chain.last().map(|f| f.id.as_str()), Some(f.id.as_str()));
            let names: Vec<&str> = chain.iter().skip(1).map(|f| f.name.as_str()).collect();
            let segments: Vec<&str> =
                if f.path.is_empty() { vec![] } else { f.path.split('/').collect() };
            assert_eq!(names, segments, "breadcrumbs of '{}' must spell its path", f.id);
        }
        assert!(vfs.breadcrumbs("no-such-id").is_none());
    }

    #[test]
    fn test_listing_order_folders_then_files() {
        let vfs = seed::demo().unwrap();
        let entries = vfs.entries(ROOT_ID);
        let ids: Vec<&str> = entries.iter().map(|e| e.id()).collect();
        assert_eq!(
            ids,
            vec![
                "design", "docs", "photos", "music", "videos", "f01", "f02", "f03", "f04", "f05",
                "f06", "f30"
            ]
        );
        assert_eq!(vfs.file_count_in(ROOT_ID), 7);
    }

    #[test]
    fn test_query_matches_case_insensitively() {
        let vfs = seed::demo().unwrap();
        let lower: Vec<&str> =
            vfs.filtered_entries(ROOT_ID, "photo", CategoryFilter::All).iter().map(|e| e.id()).collect();
        let upper: Vec<&str> =
            vfs.filtered_entries(ROOT_ID, "PHOTO", CategoryFilter::All).iter().map(|e| e.id()).collect();
        assert_eq!(lower, upper);
        // The folder "Photos" plus vacation-photo.jpg and team-photo.JPG.
        assert_eq!(lower, vec!["photos", "f03", "f05"]);
    }

    #[test]
    fn test_category_filter_exempts_folders() {
        let vfs = seed::demo().unwrap();
        let entries = vfs.filtered_entries(ROOT_ID, "", CategoryFilter::Pictures);
        let folders = entries.iter().filter(|e| e.is_folder()).count();
        assert_eq!(folders, 5, "all child folders survive a category filter");
        let file_ids: Vec<&str> =
            entries.iter().filter(|e| !e.is_folder()).map(|e| e.id()).collect();
        // team-photo.JPG counts despite the uppercase extension.
        assert_eq!(file_ids, vec!["f03", "f05"]);
    }

    #[test]
    fn test_emptying_the_query_only_widens() {
        let vfs = seed::demo().unwrap();
        for query in ["re", "photo", "q1", "zzz"] {
            let narrow: Vec<&str> =
                vfs.filtered_entries(ROOT_ID, query, CategoryFilter::All).iter().map(|e| e.id()).collect();
            let wide: Vec<&str> =
                vfs.filtered_entries(ROOT_ID, "", CategoryFilter::All).iter().map(|e| e.id()).collect();
            for id in &narrow {
                assert!(wide.contains(id), "'{}' matched '{}' but vanished from the full listing", id, query);
            }
        }
    }

    #[test]
    fn test_pagination_union_is_the_whole_listing() {
        let vfs = seed::demo().unwrap();
        let full: Vec<&str> =
            vfs.filtered_entries(ROOT_ID, "", CategoryFilter::All).iter().map(|e| e.id()).collect();

        let mut collected: Vec<String> = Vec::new();
        let page_size = 5;
        let mut offset = 0;
        loop {
            let page: Vec<String> = vfs
                .filtered_entries(ROOT_ID, "", CategoryFilter::All)
                .into_iter()
                .skip(offset)
                .take(page_size)
                .map(|e| e.id().to_string())
                .collect();
            if page.is_empty() {
                break;
            }
            offset += page.len();
            collected.extend(page);
        }
        assert_eq!(collected, full, "pages must concatenate to the full listing, no gaps, no dupes");
    }

    #[test]
    fn test_search_spans_all_folders() {
        let vfs = seed::demo().unwrap();
        let ids: Vec<&str> =
            vfs.search("report", CategoryFilter::All).iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["reports", "f15", "f16"]);

        // Empty query with a filter: every folder except the root, plus all
        // matching files.
        let hits = vfs.search("", CategoryFilter::Pictures);
        assert_eq!(hits.iter().filter(|e| e.is_folder()).count(), 8);
        assert_eq!(hits.iter().filter(|e| !e.is_folder()).count(), 8);
        assert!(hits.iter().all(|e| e.id() != ROOT_ID));
    }

    #[test]
    fn test_recent_files_newest_first() {
        let vfs = seed::demo().unwrap();
        let recent = vfs.recent_files(3);
        let ids: Vec<&str> = recent.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f01", "f04", "f12"]);

        let all = vfs.recent_files(usize::MAX);
        assert_eq!(all.len(), vfs.files().len());
        for pair in all.windows(2) {
            assert!(pair[0].last_modified >= pair[1].last_modified);
        }
    }

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(classify("photo.jpg"), Category::Pictures);
        assert_eq!(classify("photo.JPG"), Category::Pictures);
        assert_eq!(classify("hiking.HEIC"), Category::Pictures);
        assert_eq!(classify("clip.mkv"), Category::Videos);
        assert_eq!(classify("report.pdf"), Category::Documents);
        assert_eq!(classify("track.FLAC"), Category::Music);
        assert_eq!(classify("archive.tar.zst"), Category::Other);
        assert_eq!(classify("README"), Category::Other);
        assert_eq!(classify(".gitignore"), Category::Other);
        assert_eq!(classify("trailing."), Category::Other);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Pictures).unwrap(), "\"pictures\"");
        let filter: CategoryFilter = serde_json::from_str("\"documents\"").unwrap();
        assert_eq!(filter, CategoryFilter::Documents);
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }
}
