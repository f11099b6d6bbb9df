//! Domain models for address scope consolidation.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Family`] and [`Address`] - Integer addresses tagged with their family
//! - [`Interval`] - Closed address range
//! - [`CidrBlock`] and [`ScopeEntry`] - Aligned blocks and output tokens

mod address;
mod cidr;
mod interval;

// Re-export public types
pub use address::{cut_addr, get_cidr_mask, host_mask, lo_mask, Address, Family};
pub use cidr::{CidrBlock, ScopeEntry};
pub use interval::Interval;
