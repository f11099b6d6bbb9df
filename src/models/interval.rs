//! Closed address interval.

use super::{Address, Family};
use crate::error::ScopeError;
use std::fmt;

/// Every address `a` of one family with `lo <= a <= hi`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    pub family: Family,
    pub lo: u128,
    pub hi: u128,
}

impl Interval {
    /// Build an interval from two addresses of the same family with `lo <= hi`.
    pub fn new(lo: Address, hi: Address) -> Result<Interval, ScopeError> {
        if lo.family != hi.family {
            return Err(ScopeError::FamilyMismatch {
                expected: lo.family,
                found: hi.family,
                context: format!("range '{lo}-{hi}'"),
            });
        }
        if lo.value > hi.value {
            return Err(ScopeError::malformed(
                &format!("{lo}-{hi}"),
                "range start is greater than range end",
            ));
        }
        Ok(Interval {
            family: lo.family,
            lo: lo.value,
            hi: hi.value,
        })
    }

    pub fn single(addr: Address) -> Interval {
        Interval {
            family: addr.family,
            lo: addr.value,
            hi: addr.value,
        }
    }

    pub fn lo_addr(&self) -> Address {
        Address {
            family: self.family,
            value: self.lo,
        }
    }

    pub fn hi_addr(&self) -> Address {
        Address {
            family: self.family,
            value: self.hi,
        }
    }

    /// Number of addresses covered, saturating for the whole IPv6 space.
    pub fn size(&self) -> u128 {
        (self.hi - self.lo).saturating_add(1)
    }

    pub fn contains(&self, value: u128) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// `lo <= hi` and both ends inside the family's address space.
    pub fn is_well_formed(&self) -> bool {
        self.lo <= self.hi && self.hi <= self.family.max_value()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo_addr(), self.hi_addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_interval() {
        let lo: Address = "10.0.0.1".parse().unwrap();
        let hi: Address = "10.0.0.10".parse().unwrap();
        let interval = Interval::new(lo, hi).unwrap();
        assert_eq!(interval.size(), 10);
        assert_eq!(interval.to_string(), "10.0.0.1-10.0.0.10");
        assert!(interval.contains(lo.value));
        assert!(!interval.contains(hi.value + 1));

        assert!(matches!(
            Interval::new(hi, lo),
            Err(ScopeError::MalformedSpec { .. })
        ));
    }

    #[test]
    fn test_new_interval_family_mismatch() {
        let lo: Address = "10.0.0.1".parse().unwrap();
        let hi: Address = "::1".parse().unwrap();
        assert_eq!(
            Interval::new(lo, hi).unwrap_err(),
            ScopeError::FamilyMismatch {
                expected: Family::V4,
                found: Family::V6,
                context: "range '10.0.0.1-::1'".to_string(),
            }
        );
    }

    #[test]
    fn test_size_whole_v6_space() {
        let all = Interval {
            family: Family::V6,
            lo: 0,
            hi: u128::MAX,
        };
        assert_eq!(all.size(), u128::MAX);
        assert!(all.is_well_formed());
    }

    #[test]
    fn test_is_well_formed() {
        assert!(Interval::single(Address::v4(7)).is_well_formed());
        let too_high = Interval {
            family: Family::V4,
            lo: 0,
            hi: 1 << 32,
        };
        assert!(!too_high.is_well_formed());
        let reversed = Interval {
            family: Family::V4,
            lo: 5,
            hi: 4,
        };
        assert!(!reversed.is_well_formed());
    }
}
