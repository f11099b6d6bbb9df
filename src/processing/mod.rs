//! Address scope processing logic.
//!
//! This module contains the interval algebra behind consolidation:
//! - [`parse`] - Parsing of address, CIDR and range specs
//! - [`interval_set`] - Union and difference of interval sets
//! - [`compact`] - Minimal CIDR decomposition of intervals
//! - [`scope`] - In-scope minus out-of-scope pipeline

mod compact;
mod interval_set;
mod parse;
mod scope;

// Re-export public functions
pub use compact::{compact, compact_set};
pub use interval_set::IntervalSet;
pub use parse::parse_spec;
pub use scope::{consolidate, consolidate_report, Consolidation, FamilySummary};
