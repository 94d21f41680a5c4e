/*!
 * Utility functions for repodump
 */

use std::path::Path;

use crate::serializer::{is_dir_like, walk};

/// Count the files the serializer will visit, for progress tracking.
///
/// Ignored files are counted as well, since the serializer still visits them.
pub fn count_files(dir: &Path) -> u64 {
    walk(dir)
        .filter_map(Result::ok)
        .filter(|entry| !is_dir_like(entry))
        .count() as u64
}
