//! Terminal output utilities.
//!
//! Provides formatting helpers and the coloured per-family summary.

use crate::processing::FamilySummary;
use colored::Colorize;
use std::io::{self, Write};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Write one summary row per family, with a header row.
pub fn write_summary<W: Write>(out: &mut W, summary: &[FamilySummary]) -> io::Result<()> {
    writeln!(
        out,
        r#""family",          "in_scope",          "excluded",         "remaining", "blocks""#
    )?;
    for row in summary {
        let excluded = format_field(row.excluded_addresses, 20);
        writeln!(
            out,
            "{family},{in_scope},{excluded},{remaining},{blocks}",
            family = format_field(row.family, 8).bold(),
            in_scope = format_field(row.in_scope_addresses, 20),
            excluded = if row.excluded_addresses > 0 {
                excluded.yellow()
            } else {
                excluded.normal()
            },
            remaining = format_field(row.remaining_addresses, 20).green(),
            blocks = format_field(row.blocks, 8),
        )?;
    }
    Ok(())
}

/// Print the summary to stderr, keeping stdout for the entries.
pub fn print_summary(summary: &[FamilySummary]) -> io::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    if summary.is_empty() {
        writeln!(out, "{}", "No addresses in scope".on_red())?;
        return Ok(());
    }
    write_summary(&mut out, summary)
}
