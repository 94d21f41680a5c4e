/*!
 * Reporting functionality for repodump
 *
 * Renders the end-of-run summary with the tabled library.
 */

use std::collections::HashMap;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::{DumpStatistics, FileStats};

/// Statistics for a finished dump
#[derive(Debug, Clone)]
pub struct DumpReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to render and write the dump
    pub duration: Duration,
    /// Files that produced a content block
    pub files_written: usize,
    /// Files skipped by the ignore patterns
    pub files_ignored: usize,
    /// Files that could not be read as text
    pub files_unreadable: usize,
    /// Empty files
    pub files_empty: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each written file
    pub file_details: HashMap<String, FileStats>,
}

impl DumpReport {
    /// Build a report from serializer statistics
    pub fn new(output_file: String, duration: Duration, stats: &DumpStatistics) -> Self {
        Self {
            output_file,
            duration,
            files_written: stats.files_written,
            files_ignored: stats.files_ignored,
            files_unreadable: stats.files_unreadable,
            files_empty: stats.files_empty,
            total_lines: stats.total_lines,
            total_chars: stats.total_chars,
            file_details: stats.file_details.clone(),
        }
    }
}

/// Console table report generator for dump results
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &DumpReport) -> String {
        self.generate_console_report(report)
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &DumpReport) {
        println!("\n{}", self.generate_report(report));
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    // Keep the trailing path segments that fit in `max_len`
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.chars().count() <= max_len {
            return path.to_string();
        }

        let parts: Vec<&str> = path.split('/').collect();
        let mut current_len = 3; // "..."
        let mut segments = Vec::new();

        for part in parts.iter().rev() {
            let part_len = part.chars().count() + 1;
            if current_len + part_len <= max_len {
                segments.push(*part);
                current_len += part_len;
            } else {
                break;
            }
        }

        if segments.is_empty() {
            let tail: String = path
                .chars()
                .rev()
                .take(max_len.saturating_sub(3))
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            return format!("...{}", tail);
        }

        let mut result = String::from("...");
        for part in segments.iter().rev() {
            result.push('/');
            result.push_str(part);
        }
        result
    }

    fn create_summary_table(&self, report: &DumpReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Written".to_string(),
                value: self.format_number(report.files_written),
            },
            SummaryRow {
                key: "🚫 Files Ignored".to_string(),
                value: self.format_number(report.files_ignored),
            },
        ];

        if report.files_unreadable > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Unreadable Files".to_string(),
                value: self.format_number(report.files_unreadable),
            });
        }

        if report.files_empty > 0 {
            rows.push(SummaryRow {
                key: "🕳️ Empty Files".to_string(),
                value: self.format_number(report.files_empty),
            });
        }

        rows.push(SummaryRow {
            key: "📝 Total Lines".to_string(),
            value: self.format_number(report.total_lines),
        });

        rows.push(SummaryRow {
            key: "📦 LLM Tokens".to_string(),
            value: format!(
                "{} tokens (estimated)",
                self.format_number(report.total_chars / 4)
            ),
        });

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &DumpReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        // Largest first, ties broken by path for a stable listing
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(pa, a), (pb, b)| b.chars.cmp(&a.chars).then_with(|| pa.cmp(pb)));

        let files_to_show = if files.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                tokens: self.format_number(info.chars / 4),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &DumpReport) -> String {
        let summary_table = self.create_summary_table(report);
        let summary_title = "✅  DUMP COMPLETE";

        if report.file_details.is_empty() {
            return format!("{}\n{}", summary_title, summary_table);
        }

        let files_table = self.create_files_table(report);
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT  📋"
        } else {
            "📋  WRITTEN FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}
