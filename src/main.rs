/*!
 * Command-line interface for repodump
 */

use std::io::{self, IsTerminal};
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use repodump::config::{Args, Config};
use repodump::dump::render_dump;
use repodump::error::Result;
use repodump::report::{DumpReport, Reporter};
use repodump::serializer::Serializer;
use repodump::utils::count_files;
use repodump::writer::TextWriter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args)?;

    // Nothing is written unless the root exists
    config.validate()?;
    let output_file = config.output_file()?;

    let progress = if config.quiet {
        ProgressBar::hidden()
    } else {
        let progress = ProgressBar::new(count_files(&config.target_dir));
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress.enable_steady_tick(Duration::from_millis(100));
        progress.set_prefix("📊 Processing");
        progress.set_message(format!(
            "📂 Scanning directory: {}",
            config.target_dir.display()
        ));
        progress
    };

    let mut serializer = Serializer::new(Arc::new(progress.clone()));
    let writer = TextWriter::new(output_file);

    let start_time = Instant::now();
    let text = render_dump(&config.target_dir, &mut serializer)?;
    writer.write(&text)?;
    let total_duration = start_time.elapsed();

    progress.finish_and_clear();

    if config.quiet {
        return Ok(());
    }

    println!(
        "\nRepository content has been written to {}",
        writer.output_file().display()
    );

    let report = DumpReport::new(
        writer.output_file().display().to_string(),
        total_duration,
        serializer.statistics(),
    );
    Reporter::new().print_report(&report);

    Ok(())
}
