/*!
 * Compiled-in ignore patterns shared by the tree renderer and the serializer
 */

use std::path::Path;

use once_cell::sync::Lazy;

/// Patterns excluded from both the tree listing and the content dump.
///
/// Matching is plain substring containment against the full path, so the
/// `*` in entries such as `*.log` is a literal character, not a glob.
pub static IGNORE_PATTERNS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Build and cache directories
        ".gradle",
        "build",
        "dist",
        "target",
        "out",
        "node_modules",
        "__pycache__",
        ".cache",
        "bin",
        // IDE and editor directories
        ".idea",
        ".vscode",
        ".eclipse",
        ".settings",
        // Version control
        ".git",
        // Configuration files
        ".gitignore",
        ".env",
        ".editorconfig",
        ".prettierrc",
        "package-lock.json",
        "yarn.lock",
        "pom.xml",
        "gradle.properties",
        "gradlew",
        "gradlew.bat",
        "settings.gradle",
        "build.gradle",
        // Compiled files
        ".class",
        ".pyc",
        ".pyo",
        ".pyd",
        ".so",
        ".dll",
        ".dylib",
        // System files
        ".DS_Store",
        "Thumbs.db",
        // Temporary files
        "*.log",
        "*.tmp",
        "*.temp",
        "*.swp",
        // Binary and media files
        "*.pdf",
        "*.jpg",
        "*.png",
        "*.gif",
        "*.ico",
        "*.zip",
        "*.tar",
        "*.gz",
        "*.rar",
        // Database files
        "*.sqlite",
        "*.sqlite3",
    ]
});

/// Check if a path string contains any of the ignore patterns
pub fn should_ignore(path: &str) -> bool {
    IGNORE_PATTERNS.iter().any(|pattern| path.contains(pattern))
}

/// Check a filesystem path against the ignore patterns.
///
/// The whole path is tested, root prefix included: a repository that lives
/// under `/home/me/build/` has every entry ignored.
pub fn should_ignore_path(path: &Path) -> bool {
    should_ignore(&path.to_string_lossy())
}
