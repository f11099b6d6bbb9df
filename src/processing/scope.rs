//! In-scope minus out-of-scope consolidation.
//!
//! Parses both spec lists, merges each into an [`IntervalSet`] per address
//! family, subtracts, and compacts what is left into CIDR blocks.

use crate::error::ScopeError;
use crate::models::{Family, Interval, ScopeEntry};
use crate::processing::{compact_set, parse_spec, IntervalSet};
use serde::Serialize;

/// Address counts for one family of a consolidation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilySummary {
    pub family: Family,
    /// Distinct in-scope addresses before subtraction.
    pub in_scope_addresses: u128,
    /// In-scope addresses removed by the out-of-scope list.
    pub excluded_addresses: u128,
    pub remaining_addresses: u128,
    pub blocks: usize,
}

/// Output tokens plus per-family summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Consolidation {
    pub entries: Vec<ScopeEntry>,
    pub summary: Vec<FamilySummary>,
}

/// Minimal CIDR list covering `in_scope` minus `out_scope`.
///
/// Blank specs are skipped. The first malformed spec on either side aborts
/// the run with the parser's error. IPv4 blocks come before IPv6 blocks.
pub fn consolidate<S: AsRef<str>, T: AsRef<str>>(
    in_scope: &[S],
    out_scope: &[T],
) -> Result<Vec<ScopeEntry>, ScopeError> {
    Ok(consolidate_report(in_scope, out_scope)?.entries)
}

/// Same as [`consolidate`], also returning address counts per family.
pub fn consolidate_report<S: AsRef<str>, T: AsRef<str>>(
    in_scope: &[S],
    out_scope: &[T],
) -> Result<Consolidation, ScopeError> {
    log::debug!(
        "#Start consolidate() {} in-scope, {} out-of-scope spec(s)",
        in_scope.len(),
        out_scope.len()
    );
    let in_intervals = parse_all("in-scope", in_scope)?;
    let out_intervals = parse_all("out-of-scope", out_scope)?;

    let mut report = Consolidation::default();
    for family in [Family::V4, Family::V6] {
        let included = family_set(family, &in_intervals)?;
        let excluded = family_set(family, &out_intervals)?;
        if included.is_empty() && excluded.is_empty() {
            continue;
        }

        let remaining = included.difference(&excluded)?;
        let entries = compact_set(&remaining);
        log::debug!(
            "{family}: {} in-scope interval(s) - {} out-of-scope interval(s) = {} interval(s), {} block(s)",
            included.len(),
            excluded.len(),
            remaining.len(),
            entries.len()
        );

        report.summary.push(FamilySummary {
            family,
            in_scope_addresses: included.address_count(),
            excluded_addresses: included
                .address_count()
                .saturating_sub(remaining.address_count()),
            remaining_addresses: remaining.address_count(),
            blocks: entries.len(),
        });
        report.entries.extend(entries);
    }

    Ok(report)
}

fn parse_all<S: AsRef<str>>(list: &str, specs: &[S]) -> Result<Vec<Interval>, ScopeError> {
    let mut intervals = Vec::with_capacity(specs.len());
    for (i, spec) in specs.iter().enumerate() {
        let spec = spec.as_ref();
        if spec.trim().is_empty() {
            continue;
        }
        match parse_spec(spec) {
            Ok(parsed) => intervals.extend(parsed),
            Err(e) => {
                log::error!("{list} line {}: {e}", i + 1);
                return Err(e);
            }
        }
    }
    Ok(intervals)
}

fn family_set(family: Family, intervals: &[Interval]) -> Result<IntervalSet, ScopeError> {
    IntervalSet::from_intervals(
        family,
        intervals.iter().filter(|i| i.family == family).copied(),
    )
}
