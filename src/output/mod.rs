//! Output formatting for consolidated scope data.
//!
//! This module handles formatting and outputting results:
//! - [`writer`] - Text and JSON output of entries
//! - [`terminal`] - Terminal summary with colors

mod terminal;
mod writer;

pub use terminal::{format_field, print_summary, write_summary};
pub use writer::{write_entries, write_to_path, OutputFormat};
