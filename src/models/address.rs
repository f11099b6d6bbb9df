//! Address family and integer address utilities.
//!
//! Every address is held as a `u128` tagged with its [`Family`], so the
//! interval arithmetic is the same for IPv4 and IPv6.

use crate::error::ScopeError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// IP address family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Family {
    #[serde(rename = "IPv4")]
    V4,
    #[serde(rename = "IPv6")]
    V6,
}

impl Family {
    /// Width of the address space in bits.
    pub const fn bits(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Highest address value of the family.
    pub const fn max_value(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Host part of a prefix as a bit mask, e.g. `/24` on IPv4 gives `0xFF`.
pub fn host_mask(family: Family, len: u8) -> Result<u128, ScopeError> {
    if len > family.bits() {
        return Err(ScopeError::InvalidPrefix {
            family,
            prefix: len,
        });
    }
    Ok(low_bits(u32::from(family.bits() - len)))
}

/// Mask with the lowest `n` bits set, `n` up to 128.
pub(crate) fn low_bits(n: u32) -> u128 {
    match 1u128.checked_shl(n) {
        Some(size) => size - 1,
        None => u128::MAX,
    }
}

/// Convert a CIDR prefix length to a network mask.
///
/// # Examples
/// ```
/// use ip_scope_summary::models::{get_cidr_mask, Family};
/// assert_eq!(get_cidr_mask(Family::V4, 24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(family: Family, len: u8) -> Result<u128, ScopeError> {
    Ok(family.max_value() & !host_mask(family, len)?)
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: Address, len: u8) -> Result<Address, ScopeError> {
    let mask = get_cidr_mask(addr.family, len)?;
    Ok(Address {
        family: addr.family,
        value: addr.value & mask,
    })
}

/// Smallest prefix length that `addr` is aligned to, based on trailing zeros.
pub fn lo_mask(addr: Address) -> u8 {
    let bits = addr.family.bits();
    let trailing_zeros = addr.value.trailing_zeros().min(u32::from(bits)) as u8;
    bits - trailing_zeros
}

/// An IP address as an integer tagged with its family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    pub family: Family,
    pub value: u128,
}

impl Address {
    pub fn v4(value: u32) -> Address {
        Address {
            family: Family::V4,
            value: u128::from(value),
        }
    }

    pub fn v6(value: u128) -> Address {
        Address {
            family: Family::V6,
            value,
        }
    }

    /// Convert back to a std address, `None` when the value is outside the family.
    pub fn to_ip(&self) -> Option<IpAddr> {
        match self.family {
            Family::V4 => u32::try_from(self.value)
                .ok()
                .map(|v| IpAddr::V4(Ipv4Addr::from(v))),
            Family::V6 => Some(IpAddr::V6(Ipv6Addr::from(self.value))),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Address {
        match addr {
            IpAddr::V4(v4) => Address::from(v4),
            IpAddr::V6(v6) => Address::from(v6),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address::v4(u32::from(addr))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Address {
        Address::v6(u128::from(addr))
    }
}

impl FromStr for Address {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Address, ScopeError> {
        let s = s.trim();
        let addr: IpAddr = s
            .parse()
            .map_err(|_| ScopeError::malformed(s, format!("invalid address {s}")))?;
        Ok(Address::from(addr))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_ip() {
            Some(ip) => write!(f, "{ip}"),
            None => write!(f, "{:#x}", self.value),
        }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
