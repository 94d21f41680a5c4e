/*!
 * Output file handling for repodump
 */

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Suffix appended to the repository name to form the output file name
pub const OUTPUT_SUFFIX: &str = "_repository_content.txt";

/// Derive `<root basename>_repository_content.txt` for `root`.
///
/// The root is made absolute and `.`/`..` are collapsed lexically, so a
/// symlinked root keeps the link's own name. The result is relative to the
/// working directory.
pub fn output_file_name(root: &Path) -> Result<PathBuf> {
    let abs_path = lexical_absolute(root)?;
    let repo_name = abs_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(PathBuf::from(format!("{}{}", repo_name, OUTPUT_SUFFIX)))
}

// Absolute form of `path` without touching the filesystem beyond the cwd
fn lexical_absolute(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Writes the rendered dump to disk
pub struct TextWriter {
    /// Destination file, replaced if it exists
    output_file: PathBuf,
}

impl TextWriter {
    /// Create a new writer for `output_file`
    pub fn new(output_file: PathBuf) -> Self {
        Self { output_file }
    }

    /// Destination path
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Write `text` as UTF-8, overwriting any existing file
    pub fn write(&self, text: &str) -> Result<()> {
        let file = File::create(&self.output_file)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;

        debug!(
            "Wrote {} bytes to {}",
            text.len(),
            self.output_file.display()
        );
        Ok(())
    }
}
