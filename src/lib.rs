//! IP scope consolidation.
//!
//! Turns lists of in-scope and out-of-scope address specs (single
//! addresses, CIDR blocks and `start-end` ranges) into the minimal list of
//! CIDR blocks covering exactly in-scope minus out-of-scope.
//!
//! ```
//! use ip_scope_summary::consolidate;
//! let entries = consolidate(&["10.0.0.0/24"], &["10.0.0.128-10.0.0.255"]).unwrap();
//! assert_eq!(entries[0].to_string(), "10.0.0.0/25");
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;

pub use config::Config;
pub use error::ScopeError;
pub use processing::{consolidate, consolidate_report, Consolidation};

/// Read both spec files and consolidate them.
pub fn consolidate_files(config: &Config) -> Result<Consolidation, Box<dyn Error>> {
    let in_scope = input::read_spec_file(&config.in_scope_file)?;
    let out_scope = input::read_spec_file(&config.out_scope_file)?;
    Ok(consolidate_report(&in_scope[..], &out_scope[..])?)
}

/// Consolidate, then write the result and the optional summary.
///
/// Nothing is written when either spec file fails to parse.
pub fn run(config: &Config) -> Result<Consolidation, Box<dyn Error>> {
    log::info!("#Start run() {config:?}");
    let report = consolidate_files(config)?;
    output::write_to_path(config.output_file.as_deref(), &report, config.format)?;
    if config.summary {
        output::print_summary(&report.summary)?;
    }
    Ok(report)
}
