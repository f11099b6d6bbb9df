//! Sorted sets of non-overlapping, non-adjacent address intervals.

use crate::error::ScopeError;
use crate::models::{Family, Interval};
use itertools::Itertools;

/// Ordered, merged collection of intervals of one family.
///
/// Intervals are sorted by `lo`, never overlap, and never touch: for
/// consecutive intervals `a`, `b` there is always `a.hi + 1 < b.lo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSet {
    family: Family,
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn empty(family: Family) -> IntervalSet {
        IntervalSet {
            family,
            intervals: Vec::new(),
        }
    }

    /// Union of arbitrary intervals, in any order, overlapping or not.
    pub fn from_intervals<I>(family: Family, intervals: I) -> Result<IntervalSet, ScopeError>
    where
        I: IntoIterator<Item = Interval>,
    {
        let mut sorted = Vec::new();
        for interval in intervals {
            if interval.family != family {
                return Err(ScopeError::FamilyMismatch {
                    expected: family,
                    found: interval.family,
                    context: format!("interval {interval}"),
                });
            }
            sorted.push(interval);
        }

        let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
        for next in sorted.into_iter().sorted_by_key(|i| (i.lo, i.hi)) {
            if let Some(current) = merged.last_mut() {
                // saturating: nothing is adjacent past the top of the space
                if next.lo <= current.hi.saturating_add(1) {
                    current.hi = current.hi.max(next.hi);
                    continue;
                }
            }
            merged.push(next);
        }

        Ok(IntervalSet {
            family,
            intervals: merged,
        })
    }

    /// Every address covered by `self` or `other`.
    pub fn union(&self, other: &IntervalSet) -> Result<IntervalSet, ScopeError> {
        self.check_family(other, "union")?;
        IntervalSet::from_intervals(
            self.family,
            self.intervals.iter().chain(other.intervals.iter()).copied(),
        )
    }

    /// Every address covered by `self` and not by `subtrahend`.
    pub fn difference(&self, subtrahend: &IntervalSet) -> Result<IntervalSet, ScopeError> {
        self.check_family(subtrahend, "difference")?;
        let cuts = &subtrahend.intervals;
        let mut result = Vec::with_capacity(self.intervals.len());
        let mut first_cut = 0;

        for a in &self.intervals {
            // cuts ending below `a` can not touch any later interval either
            while first_cut < cuts.len() && cuts[first_cut].hi < a.lo {
                first_cut += 1;
            }

            let mut lo = a.lo;
            let mut covered = false;
            for cut in cuts[first_cut..].iter().take_while(|cut| cut.lo <= a.hi) {
                if cut.lo > lo {
                    result.push(Interval {
                        family: self.family,
                        lo,
                        hi: cut.lo - 1,
                    });
                }
                if cut.hi >= a.hi {
                    covered = true;
                    break;
                }
                lo = cut.hi + 1;
            }
            if !covered {
                result.push(Interval {
                    family: self.family,
                    lo,
                    hi: a.hi,
                });
            }
        }

        Ok(IntervalSet {
            family: self.family,
            intervals: result,
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn contains(&self, value: u128) -> bool {
        let idx = self.intervals.partition_point(|i| i.hi < value);
        self.intervals
            .get(idx)
            .map(|i| i.contains(value))
            .unwrap_or(false)
    }

    /// Number of addresses in the set, saturating at `u128::MAX`.
    pub fn address_count(&self) -> u128 {
        self.intervals
            .iter()
            .fold(0u128, |acc, i| acc.saturating_add(i.size()))
    }

    fn check_family(&self, other: &IntervalSet, op: &str) -> Result<(), ScopeError> {
        if self.family != other.family {
            return Err(ScopeError::FamilyMismatch {
                expected: self.family,
                found: other.family,
                context: format!("interval set {op}"),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse_spec;

    fn iv(lo: u128, hi: u128) -> Interval {
        Interval {
            family: Family::V4,
            lo,
            hi,
        }
    }

    fn set(intervals: &[(u128, u128)]) -> IntervalSet {
        IntervalSet::from_intervals(Family::V4, intervals.iter().map(|&(lo, hi)| iv(lo, hi)))
            .unwrap()
    }

    fn pairs(set: &IntervalSet) -> Vec<(u128, u128)> {
        set.iter().map(|i| (i.lo, i.hi)).collect()
    }

    fn assert_canonical(set: &IntervalSet) {
        for w in set.intervals().windows(2) {
            assert!(w[0].lo <= w[0].hi, "Inverted interval {:?}", w[0]);
            assert!(
                w[0].hi + 1 < w[1].lo,
                "Intervals overlap or touch: {:?} {:?}",
                w[0],
                w[1]
            );
        }
    }

    /// Small deterministic generator, good enough to shuffle test input.
    fn lcg(seed: &mut u64) -> u64 {
        *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        *seed >> 33
    }

    fn random_set(seed: &mut u64, count: usize) -> Vec<(u128, u128)> {
        (0..count)
            .map(|_| {
                let lo = (lcg(seed) % 256) as u128;
                let len = (lcg(seed) % 24) as u128;
                (lo, (lo + len).min(255))
            })
            .collect()
    }

    #[test]
    fn test_union_merges_overlap_and_adjacency() {
        let s = set(&[(10, 20), (21, 30), (5, 12), (40, 50), (52, 60)]);
        assert_eq!(pairs(&s), vec![(5, 30), (40, 50), (52, 60)]);
        assert_canonical(&s);
    }

    #[test]
    fn test_union_contained_and_duplicates() {
        let s = set(&[(0, 100), (10, 20), (10, 20), (100, 100)]);
        assert_eq!(pairs(&s), vec![(0, 100)]);
    }

    #[test]
    fn test_union_empty() {
        let s = set(&[]);
        assert!(s.is_empty());
        assert_eq!(s.address_count(), 0);
    }

    #[test]
    fn test_union_idempotent_and_order_independent() {
        let mut seed = 7;
        for _ in 0..50 {
            let input = random_set(&mut seed, 12);
            let once = set(&input);
            assert_canonical(&once);
            assert_eq!(set(&pairs(&once)), once, "union(union(S)) != union(S)");

            let mut reversed = input.clone();
            reversed.reverse();
            assert_eq!(set(&reversed), once);

            let mut rotated = input.clone();
            rotated.rotate_left(5);
            assert_eq!(set(&rotated), once);
        }
    }

    #[test]
    fn test_union_of_sets() {
        let a = set(&[(0, 9), (20, 29)]);
        let b = set(&[(10, 15), (25, 40)]);
        assert_eq!(pairs(&a.union(&b).unwrap()), vec![(0, 15), (20, 40)]);
    }

    #[test]
    fn test_union_top_of_v6_space() {
        let top = u128::MAX;
        let s = IntervalSet::from_intervals(
            Family::V6,
            vec![
                Interval {
                    family: Family::V6,
                    lo: top - 10,
                    hi: top,
                },
                Interval {
                    family: Family::V6,
                    lo: top - 3,
                    hi: top,
                },
                Interval {
                    family: Family::V6,
                    lo: 0,
                    hi: 5,
                },
            ],
        )
        .unwrap();
        assert_eq!(pairs(&s), vec![(0, 5), (top - 10, top)]);
    }

    #[test]
    fn test_union_family_mismatch() {
        let v6 = parse_spec("::1").unwrap();
        let err = IntervalSet::from_intervals(Family::V4, v6).unwrap_err();
        assert!(matches!(
            err,
            ScopeError::FamilyMismatch {
                expected: Family::V4,
                found: Family::V6,
                ..
            }
        ));

        let a = set(&[(0, 1)]);
        let b = IntervalSet::empty(Family::V6);
        assert!(a.union(&b).is_err());
        assert!(a.difference(&b).is_err());
    }

    #[test]
    fn test_difference_cases() {
        let a = set(&[(10, 20)]);
        // hole in the middle
        assert_eq!(
            pairs(&a.difference(&set(&[(14, 15)])).unwrap()),
            vec![(10, 13), (16, 20)]
        );
        // prefix and suffix overlaps
        assert_eq!(pairs(&a.difference(&set(&[(0, 12)])).unwrap()), vec![(13, 20)]);
        assert_eq!(pairs(&a.difference(&set(&[(18, 30)])).unwrap()), vec![(10, 17)]);
        // exact and total coverage
        assert!(a.difference(&set(&[(10, 20)])).unwrap().is_empty());
        assert!(a.difference(&set(&[(0, 255)])).unwrap().is_empty());
        // entirely outside
        assert_eq!(pairs(&a.difference(&set(&[(0, 8), (22, 30)])).unwrap()), vec![(10, 20)]);
        // adjacent on both sides, nothing removed
        assert_eq!(pairs(&a.difference(&set(&[(0, 9), (21, 30)])).unwrap()), vec![(10, 20)]);
        // single address at each boundary
        assert_eq!(pairs(&a.difference(&set(&[(10, 10), (20, 20)])).unwrap()), vec![(11, 19)]);
    }

    #[test]
    fn test_difference_one_cut_spans_many() {
        let a = set(&[(0, 9), (20, 29), (40, 49)]);
        let b = set(&[(5, 44)]);
        assert_eq!(pairs(&a.difference(&b).unwrap()), vec![(0, 4), (45, 49)]);
    }

    #[test]
    fn test_difference_many_cuts_one_interval() {
        let a = set(&[(0, 99)]);
        let b = set(&[(10, 19), (30, 39), (50, 59), (99, 99)]);
        assert_eq!(
            pairs(&a.difference(&b).unwrap()),
            vec![(0, 9), (20, 29), (40, 49), (60, 98)]
        );
    }

    #[test]
    fn test_difference_exhaustive_toy_domain() {
        let mut seed = 42;
        for round in 0..200 {
            let a = set(&random_set(&mut seed, 1 + round % 7));
            let b = set(&random_set(&mut seed, round % 9));
            let d = a.difference(&b).unwrap();
            assert_canonical(&d);
            for x in 0..=255u128 {
                assert_eq!(
                    d.contains(x),
                    a.contains(x) && !b.contains(x),
                    "Address {x} wrong in round {round}: a={:?} b={:?} d={:?}",
                    pairs(&a),
                    pairs(&b),
                    pairs(&d)
                );
            }
        }
    }

    #[test]
    fn test_difference_v4_boundaries() {
        let all = set(&[(0, u32::MAX as u128)]);
        let edges = set(&[(0, 0), (u32::MAX as u128, u32::MAX as u128)]);
        let d = all.difference(&edges).unwrap();
        assert_eq!(pairs(&d), vec![(1, u32::MAX as u128 - 1)]);
        assert_eq!(d.address_count(), (1u128 << 32) - 2);
    }

    #[test]
    fn test_difference_top_of_v6_space() {
        let top = u128::MAX;
        let v6_set = |pairs: &[(u128, u128)]| {
            IntervalSet::from_intervals(
                Family::V6,
                pairs.iter().map(|&(lo, hi)| Interval {
                    family: Family::V6,
                    lo,
                    hi,
                }),
            )
            .unwrap()
        };

        // ffff:...:fff0/124 minus ffff:...:fff8/125 and ffff:...:fff2
        let minuend = v6_set(&[(top - 15, top)]);
        let subtrahend = v6_set(&[(top - 7, top), (top - 13, top - 13)]);
        let d = minuend.difference(&subtrahend).unwrap();
        assert_eq!(pairs(&d), vec![(top - 15, top - 14), (top - 12, top - 8)]);
        assert_canonical(&d);

        // a suffix cut ending on u128::MAX leaves nothing past it
        let d = v6_set(&[(top - 15, top)])
            .difference(&v6_set(&[(top, top)]))
            .unwrap();
        assert_eq!(pairs(&d), vec![(top - 15, top - 1)]);
        assert!(v6_set(&[(top, top)]).difference(&v6_set(&[(0, top)])).unwrap().is_empty());
    }

    #[test]
    fn test_contains() {
        let s = set(&[(10, 20), (30, 40)]);
        assert!(!s.contains(9));
        assert!(s.contains(10));
        assert!(s.contains(20));
        assert!(!s.contains(25));
        assert!(s.contains(40));
        assert!(!s.contains(41));
        assert_eq!(s.address_count(), 22);
    }
}
