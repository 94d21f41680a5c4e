/*!
 * Configuration handling for repodump
 */

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::ensure;
use crate::error::{Result, ResultExt};
use crate::writer::output_file_name;

/// Prompt shown when no path is given on the command line
pub const PATH_PROMPT: &str = "Enter the path to your git repository: ";

/// Command-line arguments for repodump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "repodump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flatten a source tree into a single text file for LLM context",
    long_about = "Writes a directory listing followed by the contents of every non-ignored text file to <name>_repository_content.txt in the current directory."
)]
pub struct Args {
    /// Repository directory to dump (prompted for when omitted)
    pub directory_path: Option<String>,

    /// Suppress the progress spinner and the summary report
    #[clap(short, long)]
    pub quiet: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to dump
    pub target_dir: PathBuf,

    /// Whether to hide progress and the report
    pub quiet: bool,
}

impl Config {
    /// Create configuration from command-line arguments, prompting on stdin
    /// for the directory when it was not given
    pub fn from_args(args: Args) -> Result<Self> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Self::from_args_with(args, &mut stdin.lock(), &mut stdout.lock())
    }

    /// Same as [`Config::from_args`], reading the prompt answer from `input`
    pub fn from_args_with<R: BufRead, W: Write>(
        args: Args,
        input: &mut R,
        output: &mut W,
    ) -> Result<Self> {
        let directory_path = match args.directory_path {
            Some(path) => path,
            None => prompt_for_path(input, output)?,
        };

        Ok(Self {
            target_dir: PathBuf::from(directory_path),
            quiet: args.quiet,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.exists(),
            PathNotFound,
            "{}",
            self.target_dir.display()
        );
        Ok(())
    }

    /// Output file for this run, in the current working directory
    pub fn output_file(&self) -> Result<PathBuf> {
        output_file_name(&self.target_dir)
    }
}

fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", PATH_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| "Failed to read repository path")?;
    Ok(line.trim().to_string())
}
