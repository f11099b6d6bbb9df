//! Writing consolidated entries as text lines or JSON.

use crate::processing::Consolidation;
use clap::ValueEnum;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One CIDR block (or range) per line.
    #[default]
    Text,
    /// Pretty JSON with entries and per-family summary.
    Json,
}

/// Write the entries of `report` to `out` in the given format.
pub fn write_entries<W: Write>(
    out: &mut W,
    report: &Consolidation,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => {
            for entry in &report.entries {
                writeln!(out, "{entry}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write to a file, or to stdout when `path` is `None` or `-`.
pub fn write_to_path(
    path: Option<&Path>,
    report: &Consolidation,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::create(path)
                .map_err(|e| format!("Error creating output file {}: {e}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_entries(&mut out, report, format)?;
            log::info!(
                "Wrote {} entries ({format:?}) to {}",
                report.entries.len(),
                path.display()
            );
        }
        _ => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_entries(&mut out, report, format)?;
        }
    }
    Ok(())
}
