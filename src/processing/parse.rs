//! Parsing of textual address specifications.
//!
//! Accepts a single address (`10.0.0.1`), a CIDR block (`10.0.0.0/24`, host
//! bits are cleared) or an inclusive range (`10.0.0.1-10.0.0.9`, whitespace
//! around the dash allowed), for either address family.

use crate::error::ScopeError;
use crate::models::{Address, CidrBlock, Interval};
use regex::Regex;
use std::sync::OnceLock;

/// Regex for `start-end` ranges, dash optionally surrounded by whitespace.
static RANGE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_range_regex() -> &'static Regex {
    RANGE_REGEX.get_or_init(|| {
        Regex::new(r"^([^\s/-]+)\s*-\s*([^\s/-]+)$").expect("Invalid Regex")
    })
}

/// Parse one spec line into its closed interval.
///
/// The result always holds exactly one interval; ranges are kept whole and
/// only broken into CIDR blocks by the compactor.
pub fn parse_spec(spec: &str) -> Result<Vec<Interval>, ScopeError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(ScopeError::malformed(spec, "empty spec"));
    }

    let interval = if let Some((addr, prefix)) = spec.split_once('/') {
        parse_cidr(spec, addr, prefix)?
    } else if let Some(caps) = get_range_regex().captures(spec) {
        parse_range(spec, &caps[1], &caps[2])?
    } else {
        Interval::single(parse_addr(spec, spec)?)
    };

    log::trace!("parse_spec({spec}) -> {interval}");
    Ok(vec![interval])
}

fn parse_addr(spec: &str, addr: &str) -> Result<Address, ScopeError> {
    addr.parse::<Address>().map_err(|_| {
        ScopeError::malformed(
            spec,
            "expected an address, CIDR block or start-end range",
        )
    })
}

fn parse_cidr(spec: &str, addr: &str, prefix: &str) -> Result<Interval, ScopeError> {
    if addr.trim() != addr {
        return Err(ScopeError::malformed(spec, "whitespace before '/'"));
    }
    let addr = parse_addr(spec, addr)?;
    // u8::from_str takes a leading '+', only plain digits are a prefix here
    let prefix: u8 = Some(prefix)
        .filter(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| ScopeError::malformed(spec, format!("invalid prefix length '{prefix}'")))?;
    let block = CidrBlock::containing(addr, prefix)
        .map_err(|e| ScopeError::malformed(spec, e.to_string()))?;
    if block.lo() != addr {
        log::debug!("{spec}: host bits cleared, using {block}");
    }
    Ok(block.interval())
}

fn parse_range(spec: &str, start: &str, end: &str) -> Result<Interval, ScopeError> {
    let start = parse_addr(spec, start)?;
    let end = parse_addr(spec, end)?;
    match Interval::new(start, end) {
        Err(ScopeError::MalformedSpec { reason, .. }) => Err(ScopeError::malformed(spec, reason)),
        Err(ScopeError::FamilyMismatch {
            expected, found, ..
        }) => Err(ScopeError::FamilyMismatch {
            expected,
            found,
            context: format!("range '{spec}'"),
        }),
        other => other,
    }
}
