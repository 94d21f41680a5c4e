/*!
 * File content serialization
 */

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{RepoDumpError, Result};
use crate::filter::should_ignore_path;
use crate::types::{ContentBlock, DumpStatistics};

/// Walks a tree and collects one content block per readable file
pub struct Serializer {
    /// Progress bar, advanced once per visited file
    pub progress: Arc<ProgressBar>,
    /// Serializer statistics
    statistics: DumpStatistics,
}

impl Serializer {
    /// Create a new serializer
    pub fn new(progress: Arc<ProgressBar>) -> Self {
        Self {
            progress,
            statistics: DumpStatistics::default(),
        }
    }

    /// Statistics gathered by the last call to [`Serializer::serialize`]
    pub fn statistics(&self) -> &DumpStatistics {
        &self.statistics
    }

    /// Serialize every non-ignored, readable, non-empty file under `root`.
    ///
    /// Unlike the tree listing, ignored directories are still descended;
    /// only the files themselves are checked against the ignore patterns.
    /// Unreadable files are logged and skipped.
    pub fn serialize(&mut self, root: &Path) -> Result<Vec<ContentBlock>> {
        self.statistics = DumpStatistics::default();
        let mut blocks = Vec::new();

        for entry in walk(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if is_dir_like(&entry) {
                continue;
            }

            if let Some(block) = self.process_file(root, &entry) {
                blocks.push(block);
            }
        }

        Ok(blocks)
    }

    fn process_file(&mut self, root: &Path, entry: &DirEntry) -> Option<ContentBlock> {
        self.progress.inc(1);

        let path = entry.path();
        if should_ignore_path(path) {
            self.statistics.files_ignored += 1;
            return None;
        }

        let rel_path = path.strip_prefix(root).unwrap_or(path);
        self.progress
            .set_message(format!("Current file: {}", rel_path.display()));

        let content = match read_text(path) {
            Ok(content) => content,
            Err(e) => {
                self.progress.suspend(|| warn!("{}", e));
                self.statistics.files_unreadable += 1;
                return None;
            }
        };

        if content.is_empty() {
            self.statistics.files_empty += 1;
            return None;
        }

        let block = ContentBlock {
            path: rel_path.to_path_buf(),
            content,
        };
        self.statistics.record_written(&block);
        Some(block)
    }
}

/// Top-down walk below `root`: at each level the files, sorted by name, then
/// each subdirectory in directory order. Links are not followed.
pub(crate) fn walk(root: &Path) -> walkdir::IntoIter {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by(files_then_dirs)
        .into_iter()
}

/// Directories, including symlinks that point at one
pub(crate) fn is_dir_like(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

// Stable sort, so directories keep their native order.
fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    match (is_dir_like(a), is_dir_like(b)) {
        (false, false) => a.file_name().cmp(b.file_name()),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Read a whole file as UTF-8
fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RepoDumpError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
