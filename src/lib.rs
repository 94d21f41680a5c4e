/*!
 * repodump - Flatten a source tree into a single text file for LLM context
 *
 * The output is a directory listing followed by the relative path and
 * verbatim contents of every non-ignored text file, separated by `=` lines.
 */

pub mod config;
pub mod dump;
pub mod error;
pub mod filter;
pub mod report;
pub mod serializer;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod test_support;

// Re-export main components for easier access
pub use config::Config;
pub use dump::render_dump;
pub use error::{RepoDumpError, Result};
pub use filter::{should_ignore, should_ignore_path};
pub use report::{DumpReport, Reporter};
pub use serializer::Serializer;
pub use tree::render_tree;
pub use types::{ContentBlock, DumpStatistics, FileStats, RenderedTree};
pub use utils::count_files;
pub use writer::{output_file_name, TextWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
