use crate::core::FileEntry;

/* ============================= Selection model ============================= */

/// Ordered table of candidate files between one scan and the next.
///
/// Order is whatever the last `rebuild` supplied (ascending lexicographic,
/// coming from the scanner). Inclusion and visibility are independent flags
/// on each row; nothing here touches the filesystem.
#[derive(Debug, Default)]
pub struct SelectionModel {
    entries: Vec<FileEntry>,
}

impl SelectionModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole candidate set. Every entry comes back included and
    /// visible; flags never survive a rescan.
    pub fn rebuild(&mut self, paths: Vec<String>) {
        self.entries = paths.into_iter().map(FileEntry::new).collect();
    }

    /// Recomputes `visible` for every entry as case-insensitive substring
    /// containment of `term`. An empty term shows everything.
    pub fn set_filter(&mut self, term: &str) {
        let needle = term.to_lowercase();
        for e in &mut self.entries {
            e.visible = needle.is_empty() || e.rel_path.to_lowercase().contains(&needle);
        }
    }

    /// Bulk check/uncheck, scoped to the current filter: only entries whose
    /// `visible` flag is set are touched, hidden entries keep their state.
    /// Intentional coupling between the search box and "check all".
    pub fn set_all_included(&mut self, value: bool) {
        for e in &mut self.entries {
            if e.visible {
                e.included = value;
            }
        }
    }

    /// Per-entry mutation, independent of visibility. Unknown paths are
    /// ignored.
    pub fn set_included(&mut self, rel_path: &str, value: bool) {
        if let Some(e) = self.entries.iter_mut().find(|e| e.rel_path == rel_path) {
            e.included = value;
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|e| e.visible).count()
    }
}
