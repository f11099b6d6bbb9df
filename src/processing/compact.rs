//! Decomposition of address intervals into minimal CIDR block lists.

use crate::models::{lo_mask, Address, CidrBlock, Interval, ScopeEntry};
use crate::processing::IntervalSet;

/// Split a closed interval into the fewest CIDR blocks that cover it exactly.
///
/// Each step takes the largest block that starts at `lo`, is aligned there
/// and does not pass `hi`. A degenerate interval (`lo > hi`, or `hi` past the
/// end of its family's address space) comes back as a single
/// [`ScopeEntry::Range`].
pub fn compact(interval: &Interval) -> Vec<ScopeEntry> {
    if !interval.is_well_formed() {
        log::warn!("compact({interval:?}) not a valid interval, keeping it as a range");
        return vec![ScopeEntry::Range(*interval)];
    }

    let family = interval.family;
    let bits = u32::from(family.bits());
    let hi = interval.hi;
    let mut lo = interval.lo;
    let mut blocks = Vec::new();

    loop {
        let aligned = bits - u32::from(lo_mask(Address { family, value: lo }));
        let fits = match (hi - lo).checked_add(1) {
            Some(count) => 127 - count.leading_zeros(),
            None => 128,
        };
        let host_bits = aligned.min(fits);
        let prefix = (bits - host_bits) as u8;

        let block = match CidrBlock::new(Address { family, value: lo }, prefix) {
            Ok(block) => block,
            Err(e) => {
                log::warn!("compact({interval}) no block at {lo:#x}/{prefix}: {e}");
                blocks.push(ScopeEntry::Range(Interval { family, lo, hi }));
                break;
            }
        };
        blocks.push(ScopeEntry::Cidr(block));

        let last = block.hi().value;
        if last >= hi {
            break;
        }
        lo = last + 1;
    }

    log::trace!("compact({interval}) -> {} block(s)", blocks.len());
    blocks
}

/// Compact every interval of a set, in ascending order.
pub fn compact_set(set: &IntervalSet) -> Vec<ScopeEntry> {
    set.iter().flat_map(compact).collect()
}
