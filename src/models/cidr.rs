//! CIDR blocks and the output tokens built from them.

use super::address::low_bits;
use super::{cut_addr, host_mask, Address, Family, Interval};
use crate::error::ScopeError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Power-of-two sized block of addresses, with `base` aligned to `prefix`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CidrBlock {
    family: Family,
    base: u128,
    prefix: u8,
}

impl CidrBlock {
    /// Create a block, rejecting a base with host bits set.
    pub fn new(base: Address, prefix: u8) -> Result<CidrBlock, ScopeError> {
        let host = host_mask(base.family, prefix)?;
        if base.value & host != 0 || base.value > base.family.max_value() {
            return Err(ScopeError::Misaligned {
                family: base.family,
                base: base.to_string(),
                prefix,
            });
        }
        Ok(CidrBlock {
            family: base.family,
            base: base.value,
            prefix,
        })
    }

    /// Create the block of length `prefix` that holds `addr`, clearing host bits.
    pub fn containing(addr: Address, prefix: u8) -> Result<CidrBlock, ScopeError> {
        CidrBlock::new(cut_addr(addr, prefix)?, prefix)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Lowest (network) address in the block.
    pub fn lo(&self) -> Address {
        Address {
            family: self.family,
            value: self.base,
        }
    }

    /// Highest (broadcast) address in the block.
    pub fn hi(&self) -> Address {
        Address {
            family: self.family,
            value: self.base | self.host_bits(),
        }
    }

    pub fn interval(&self) -> Interval {
        Interval {
            family: self.family,
            lo: self.base,
            hi: self.base | self.host_bits(),
        }
    }

    pub fn is_aligned(&self) -> bool {
        self.base & self.host_bits() == 0
    }

    fn host_bits(&self) -> u128 {
        low_bits(u32::from(self.family.bits() - self.prefix))
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.lo(), self.prefix)
    }
}

/// One line of consolidated output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScopeEntry {
    Cidr(CidrBlock),
    /// Explicit `start-end` range, only produced for degenerate intervals.
    Range(Interval),
}

impl ScopeEntry {
    pub fn family(&self) -> Family {
        match self {
            ScopeEntry::Cidr(block) => block.family(),
            ScopeEntry::Range(interval) => interval.family,
        }
    }

    pub fn interval(&self) -> Interval {
        match self {
            ScopeEntry::Cidr(block) => block.interval(),
            ScopeEntry::Range(interval) => *interval,
        }
    }
}

impl fmt::Display for ScopeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeEntry::Cidr(block) => write!(f, "{block}"),
            ScopeEntry::Range(interval) => write!(f, "{interval}"),
        }
    }
}

impl Serialize for ScopeEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
