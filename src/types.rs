/*!
 * Core types and data structures for repodump
 */

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Width of the `=` delimiter lines
pub const DELIMITER_WIDTH: usize = 80;

/// First line of every tree listing
pub const TREE_HEADER: &str = "Repository Structure:";

/// Indentation unit repeated once per nesting level
pub const INDENT: &str = "  ";

/// Connector placed before every nested entry name
pub const CONNECTOR: &str = "└── ";

/// A line of 80 `=` characters
pub fn delimiter() -> String {
    "=".repeat(DELIMITER_WIDTH)
}

/// Indented listing of a directory tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTree {
    lines: Vec<String>,
}

impl RenderedTree {
    /// Start a tree with the fixed header and blank line
    pub(crate) fn with_header() -> Self {
        Self {
            lines: vec![TREE_HEADER.to_string(), String::new()],
        }
    }

    pub(crate) fn push_entry(&mut self, depth: usize, name: &str) {
        let line = if depth == 0 {
            name.to_string()
        } else {
            format!("{}{}{}", INDENT.repeat(depth), CONNECTOR, name)
        };
        self.lines.push(line);
    }

    /// All lines, header included
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for RenderedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// One file's relative path and verbatim text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Path relative to the dump root
    pub path: PathBuf,
    /// Decoded file content, never empty
    pub content: String,
}

impl ContentBlock {
    /// Render the block; it always ends with the closing delimiter and `\n`
    pub fn render(&self) -> String {
        let delimiter = delimiter();
        format!(
            "File: {}\n{}\n{}\n{}\n",
            self.path.display(),
            delimiter,
            self.content,
            delimiter
        )
    }
}

/// Per-file numbers shown in the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStats {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Counters gathered while serializing file contents
#[derive(Debug, Clone, Default)]
pub struct DumpStatistics {
    /// Files that produced a content block
    pub files_written: usize,
    /// Files skipped by the ignore patterns
    pub files_ignored: usize,
    /// Files that failed to open, read or decode
    pub files_unreadable: usize,
    /// Files skipped because they decoded to empty text
    pub files_empty: usize,
    /// Total number of lines across written files
    pub total_lines: usize,
    /// Total number of characters across written files
    pub total_chars: usize,
    /// Details for each written file, keyed by relative path
    pub file_details: HashMap<String, FileStats>,
}

impl DumpStatistics {
    pub(crate) fn record_written(&mut self, block: &ContentBlock) {
        let stats = FileStats {
            lines: block.content.lines().count(),
            chars: block.content.chars().count(),
        };
        self.files_written += 1;
        self.total_lines += stats.lines;
        self.total_chars += stats.chars;
        self.file_details
            .insert(block.path.to_string_lossy().to_string(), stats);
    }
}
