/*!
 * Repository structure listing
 */

use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::filter::should_ignore_path;
use crate::types::RenderedTree;

/// Render the indented listing of everything under `root`.
///
/// Directories come before files at each level, each group sorted by name.
/// An ignored directory is dropped together with its whole subtree. Symlinked
/// directories are followed, so a link cycle recurses without bound.
pub fn render_tree(root: &Path) -> Result<RenderedTree> {
    let mut tree = RenderedTree::with_header();
    let entries = list_dir(root)?;
    add_entries(&mut tree, entries, 0);
    Ok(tree)
}

fn add_entries(tree: &mut RenderedTree, mut entries: Vec<DirEntry>, depth: usize) {
    // (is_file, name): directories first; both checks follow symlinks
    entries.sort_by_cached_key(|e| {
        (
            e.path().is_file(),
            e.file_name().to_string_lossy().to_string(),
        )
    });

    for entry in entries {
        if should_ignore_path(entry.path()) {
            continue;
        }

        tree.push_entry(depth, &entry.file_name().to_string_lossy());

        if entry.path().is_dir() {
            match list_dir(entry.path()) {
                Ok(children) => add_entries(tree, children, depth + 1),
                Err(e) => warn!("Could not list {}: {}", entry.path().display(), e),
            }
        }
    }
}

/// Immediate children of `dir`, in the order the filesystem returns them.
///
/// Failing to open `dir` itself is an error; a child entry that cannot be
/// read is dropped and its siblings are kept.
fn list_dir(dir: &Path) -> walkdir::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) if e.depth() == 0 => return Err(e),
            Err(e) => debug!("Skipping unreadable entry: {}", e),
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::{clean_tempdir, write_file};

    #[test]
    fn directories_sort_before_files() {
        let dir = clean_tempdir();
        write_file(dir.path(), "sub/x.py", "x = 1\n");
        write_file(dir.path(), "y.py", "y = 2\n");

        let tree = render_tree(dir.path()).unwrap();
        assert_eq!(
            tree.lines(),
            ["Repository Structure:", "", "sub", "  └── x.py", "y.py"]
        );
    }

    #[test]
    fn groups_are_alphabetical() {
        let dir = clean_tempdir();
        for name in ["zeta", "alpha"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        for name in ["b.md", "a.md", "C.md"] {
            fs::write(dir.path().join(name), "doc").unwrap();
        }

        let tree = render_tree(dir.path()).unwrap();
        assert_eq!(
            &tree.lines()[2..],
            ["alpha", "zeta", "C.md", "a.md", "b.md"]
        );
    }

    #[test]
    fn ignored_directory_drops_its_subtree() {
        let dir = clean_tempdir();
        write_file(dir.path(), "node_modules/index.js", "module.exports = 1;");
        write_file(dir.path(), "main.rs", "fn main() {}");

        let tree = render_tree(dir.path()).unwrap();
        assert_eq!(&tree.lines()[2..], ["main.rs"]);
    }

    #[test]
    fn empty_directories_are_listed() {
        let dir = clean_tempdir();
        fs::create_dir_all(dir.path().join("src").join("empty")).unwrap();

        let tree = render_tree(dir.path()).unwrap();
        assert_eq!(&tree.lines()[2..], ["src", "  └── empty"]);
    }

    #[test]
    fn deeper_levels_add_indentation() {
        let dir = clean_tempdir();
        write_file(dir.path(), "a/b/c.txt", "c");

        let tree = render_tree(dir.path()).unwrap();
        assert_eq!(&tree.lines()[2..], ["a", "  └── b", "    └── c.txt"]);
    }

    #[test]
    fn unlistable_root_is_an_error() {
        let dir = clean_tempdir();
        let err = render_tree(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, crate::error::RepoDumpError::Walk(_)));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_entries_keep_their_siblings() {
        let dir = clean_tempdir();
        write_file(dir.path(), "pkg/a.rs", "a");
        write_file(dir.path(), "pkg/z.rs", "z");
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("pkg").join("m.rs"))
            .unwrap();

        let tree = render_tree(dir.path()).unwrap();
        assert_eq!(
            &tree.lines()[2..],
            ["pkg", "  └── m.rs", "  └── a.rs", "  └── z.rs"]
        );
    }

    #[test]
    fn file_root_renders_header_only() {
        let dir = clean_tempdir();
        let file = dir.path().join("single.txt");
        fs::write(&file, "alone").unwrap();

        let tree = render_tree(&file).unwrap();
        assert_eq!(tree.lines(), ["Repository Structure:", ""]);
    }
}
