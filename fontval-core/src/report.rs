//! Human-readable validation report.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use thiserror::Error;

use crate::facts::FontFacts;
use crate::parser::ParseError;
use crate::tags::TableTag;
use crate::validate::RunSummary;

pub const REPORT_TITLE: &str = "Font Validation Report";
pub const DIVIDER_WIDTH: usize = 70;
/// Tags listed inline after the table count; the rest collapse into `...`.
pub const MAX_LISTED_TABLES: usize = 8;

/// Why a path produced no metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("File not found")]
    NotFound,
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// One report block, built and printed per path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    Valid {
        file_name: String,
        facts: FontFacts,
        missing: Vec<TableTag>,
    },
    Invalid {
        file_name: String,
        reason: FailureReason,
    },
}

impl ReportEntry {
    pub fn is_valid(&self) -> bool {
        matches!(self, ReportEntry::Valid { .. })
    }
}

/// Last path component, or the whole path when there is none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// `12 (DSIG, OS/2, cmap, ...)...` style summary of a table inventory.
pub fn format_table_list(tags: &[TableTag]) -> String {
    let listed: Vec<String> = tags
        .iter()
        .take(MAX_LISTED_TABLES)
        .map(ToString::to_string)
        .collect();
    let ellipsis = if tags.len() > MAX_LISTED_TABLES {
        "..."
    } else {
        ""
    };
    format!("{} ({}){}", tags.len(), listed.join(", "), ellipsis)
}

pub fn format_tag_list(tags: &[TableTag]) -> String {
    tags.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Red,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}

/// Streams the report to any writer.
pub struct ReportWriter<W> {
    out: W,
    color: bool,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn write_header(&mut self) -> Result<()> {
        writeln!(self.out, "{REPORT_TITLE}")?;
        writeln!(self.out, "{}", "=".repeat(DIVIDER_WIDTH))?;
        Ok(())
    }

    pub fn write_entry(&mut self, entry: &ReportEntry) -> Result<()> {
        writeln!(self.out)?;
        match entry {
            ReportEntry::Valid {
                file_name,
                facts,
                missing,
            } => {
                let headline = apply_color(&format!("✅ {file_name}"), self.color, AnsiColor::Green);
                writeln!(self.out, "{headline}")?;
                writeln!(
                    self.out,
                    "   Family: {}",
                    facts.names.family.as_deref().unwrap_or("None")
                )?;
                if let Some(style) = facts.names.style.as_deref().filter(|s| !s.is_empty()) {
                    writeln!(self.out, "   Style: {style}")?;
                }
                if let Some(version) = facts.names.version.as_deref().filter(|v| !v.is_empty()) {
                    writeln!(self.out, "   Version: {version}")?;
                }
                writeln!(self.out, "   Glyphs: {}", facts.glyph_count)?;
                writeln!(self.out, "   Tables: {}", format_table_list(facts.table_tags()))?;
                if !missing.is_empty() {
                    let warning = format!("   ⚠️  Missing tables: {}", format_tag_list(missing));
                    writeln!(self.out, "{}", apply_color(&warning, self.color, AnsiColor::Yellow))?;
                }
            }
            ReportEntry::Invalid { file_name, reason } => {
                let headline = apply_color(&format!("❌ {file_name}"), self.color, AnsiColor::Red);
                writeln!(self.out, "{headline}")?;
                writeln!(self.out, "   Error: {reason}")?;
            }
        }
        Ok(())
    }

    pub fn write_summary(&mut self, summary: &RunSummary) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=".repeat(DIVIDER_WIDTH))?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Summary: {} valid, {} invalid",
            summary.valid, summary.invalid
        )?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
