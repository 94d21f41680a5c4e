/*!
 * Helpers shared by unit tests
 */

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::filter::should_ignore_path;

/// A temporary directory whose own path matches no ignore pattern.
///
/// Filtering looks at the whole path, so a temp dir named e.g.
/// `/tmp/.tmpbin42` would hide everything the test creates inside it.
pub fn clean_tempdir() -> TempDir {
    for _ in 0..64 {
        let dir = tempfile::Builder::new()
            .prefix("repodump")
            .tempdir()
            .expect("create temp dir");
        if !should_ignore_path(dir.path()) {
            return dir;
        }
    }
    panic!("temp dir location matches an ignore pattern; set TMPDIR elsewhere");
}

/// Write `content` to `root/rel`, creating parent directories
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write file");
}
