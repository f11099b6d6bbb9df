//! Spec list input.
//!
//! - [`file`] - Line reader for spec files

mod file;

pub use file::{read_spec_file, spec_lines};
