//! Small numeric helpers: searching monotone functions, merging intervals,
//! divisors and radix conversion.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::error::{Result, ToolkitError};

/// A closed integer interval `(lo, hi)`, `lo <= hi`.
pub type Interval = (i64, i64);

/// Find `c` in `[lo, hi]` with `f(c) == target`.
///
/// `f` must be monotone non-decreasing on the range, or non-increasing when
/// `reverse` is set. Calls `f` at most `floor(log2(hi - lo + 1)) + 1` values.
///
/// ```
/// use aoc_solutions::utils::numeric::binary_search;
///
/// assert_eq!(binary_search(225, 0, 20, |x| x * x, false), Some(15));
/// assert_eq!(binary_search(226, 0, 20, |x| x * x, false), None);
/// assert_eq!(binary_search(-16, 0, 20, |x| -x * x, true), Some(4));
/// ```
pub fn binary_search<T, F>(target: T, mut lo: i64, mut hi: i64, mut f: F, reverse: bool) -> Option<i64>
where
    T: Ord,
    F: FnMut(i64) -> T,
{
    while lo <= hi {
        let mid = midpoint(lo, hi);
        let ordering = f(mid).cmp(&target);
        let ordering = if reverse { ordering.reverse() } else { ordering };
        match ordering {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid.checked_add(1)?,
            Ordering::Greater => hi = mid.checked_sub(1)?,
        }
    }
    None
}

/// First `c` in `[lo, hi]` where `pred(c)` holds, for a predicate that is
/// false up to some point and true from there on.
///
/// ```
/// use aoc_solutions::utils::numeric::partition_point;
///
/// // smallest n with n^2 >= 50
/// assert_eq!(partition_point(0, 100, |n| n * n >= 50), Some(8));
/// assert_eq!(partition_point(0, 5, |n| n > 10), None);
/// ```
pub fn partition_point<F>(mut lo: i64, mut hi: i64, mut pred: F) -> Option<i64>
where
    F: FnMut(i64) -> bool,
{
    let mut found = None;
    while lo <= hi {
        let mid = midpoint(lo, hi);
        if pred(mid) {
            found = Some(mid);
            let Some(below) = mid.checked_sub(1) else { break };
            hi = below;
        } else {
            let Some(above) = mid.checked_add(1) else { break };
            lo = above;
        }
    }
    found
}

/// Floor of the mean of `lo <= hi`, valid across the whole `i64` range.
fn midpoint(lo: i64, hi: i64) -> i64 {
    lo + ((i128::from(hi) - i128::from(lo)) / 2) as i64
}

/// Merge closed intervals into a sorted list of disjoint ones with the same
/// union.
///
/// Intervals merge when they overlap or share an endpoint. Integer-adjacent
/// intervals like `(3, 7)` and `(8, 12)` stay separate. Reversed input
/// intervals (`lo > hi`) are empty and are dropped.
///
/// ```
/// use aoc_solutions::utils::numeric::merge_intervals;
///
/// let merged = merge_intervals(&[(1, 5), (3, 7), (8, 12), (10, 15), (18, 20)]);
/// assert_eq!(merged, vec![(1, 7), (8, 15), (18, 20)]);
/// ```
pub fn merge_intervals(xs: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = xs.iter().copied().filter(|&(lo, hi)| lo <= hi).collect();
    sorted.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for (lo, hi) in sorted {
        match merged.last_mut() {
            Some(last) if lo <= last.1 => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

/// All positive divisors of `n`.
pub fn factors(n: u64) -> Result<BTreeSet<u64>> {
    if n == 0 {
        return Err(ToolkitError::invalid("factors of 0 are undefined"));
    }
    let mut out = BTreeSet::new();
    let mut d = 1;
    while within_sqrt(d, n) {
        if n % d == 0 {
            out.insert(d);
            out.insert(n / d);
        }
        d += 1;
    }
    Ok(out)
}

/// `d * d <= n` without overflowing for `n` near `u64::MAX`.
fn within_sqrt(d: u64, n: u64) -> bool {
    d <= n / d
}

/// Render `k` in `base` (2..=36) using `0-9` then `a-z`.
///
/// ```
/// use aoc_solutions::utils::numeric::to_base_n;
///
/// assert_eq!(to_base_n(255, 16).unwrap(), "ff");
/// assert_eq!(to_base_n(0, 7).unwrap(), "0");
/// assert!(to_base_n(10, 1).is_err());
/// ```
pub fn to_base_n(mut k: u64, base: u32) -> Result<String> {
    if !(2..=36).contains(&base) {
        return Err(ToolkitError::invalid(format!("base {base} outside 2..=36")));
    }
    if k == 0 {
        return Ok("0".to_string());
    }
    let base = u64::from(base);
    let mut digits = Vec::new();
    while k > 0 {
        // both values are < 36 here
        let digit = char::from_digit((k % base) as u32, base as u32)
            .ok_or_else(|| ToolkitError::invalid("digit out of range"))?;
        digits.push(digit);
        k /= base;
    }
    Ok(digits.iter().rev().collect())
}

/// Integer division rounding toward negative infinity.
///
/// `i64::div` truncates toward zero, which is wrong for puzzles that expect
/// `-7 / 2 == -4`.
pub fn floor_div(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(ToolkitError::invalid("division by zero"));
    }
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_binary_search_squares() {
        assert_eq!(binary_search(225, 0, 20, |x| x * x, false), Some(15));
        assert_eq!(binary_search(226, 0, 20, |x| x * x, false), None);
        assert_eq!(binary_search(0, 0, 20, |x| x * x, false), Some(0));
        assert_eq!(binary_search(400, 0, 20, |x| x * x, false), Some(20));
    }

    #[test]
    fn test_binary_search_call_budget() {
        let mut calls = 0;
        let found = binary_search(
            777,
            0,
            1 << 20,
            |x| {
                calls += 1;
                x
            },
            false,
        );
        assert_eq!(found, Some(777));
        assert!(calls <= 21, "took {calls} calls");
    }

    #[test]
    fn test_binary_search_empty_range() {
        assert_eq!(binary_search(5, 10, 3, |x| x, false), None);
    }

    #[test]
    fn test_full_i64_range() {
        assert_eq!(binary_search(5, i64::MIN, i64::MAX, |x| x, false), Some(5));
        assert_eq!(binary_search(i64::MIN, i64::MIN, i64::MAX, |x| x, false), Some(i64::MIN));
        assert_eq!(binary_search(i64::MAX, i64::MIN, i64::MAX, |x| x, false), Some(i64::MAX));
        // the target sits between two adjacent values
        assert_eq!(binary_search(3, i64::MIN, i64::MAX, |x| x.saturating_mul(2), false), None);

        assert_eq!(partition_point(i64::MIN, i64::MAX, |x| x >= -7), Some(-7));
        assert_eq!(partition_point(i64::MIN, i64::MAX, |_| true), Some(i64::MIN));
        assert_eq!(partition_point(i64::MIN, i64::MAX, |x| x == i64::MAX), Some(i64::MAX));
        assert_eq!(partition_point(i64::MIN, i64::MAX, |_| false), None);
        assert_eq!(midpoint(i64::MIN, i64::MAX), -1);
    }

    #[test]
    fn test_binary_search_reverse() {
        assert_eq!(binary_search(80, 0, 100, |x| 100 - x, true), Some(20));
        assert_eq!(binary_search(80, 0, 100, |x| 100 - x, false), None);
    }

    #[test]
    fn test_merge_scenario() {
        let merged = merge_intervals(&[(1, 5), (3, 7), (8, 12), (10, 15), (18, 20)]);
        assert_eq!(merged, vec![(1, 7), (8, 15), (18, 20)]);
        assert_eq!(merge_intervals(&merged), merged);
    }

    #[test]
    fn test_merge_edge_cases() {
        assert_eq!(merge_intervals(&[]), Vec::<Interval>::new());
        assert_eq!(merge_intervals(&[(5, 5), (5, 9)]), vec![(5, 9)]);
        assert_eq!(merge_intervals(&[(0, 100), (10, 20)]), vec![(0, 100)]);
        assert_eq!(merge_intervals(&[(4, 2), (1, 1)]), vec![(1, 1)]);
    }

    #[test]
    fn test_factors() {
        assert_eq!(factors(1).unwrap().into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(
            factors(12).unwrap().into_iter().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 6, 12]
        );
        assert_eq!(factors(49).unwrap().len(), 3);
        assert!(factors(0).is_err());
    }

    #[test]
    fn test_factor_bound_near_u64_max() {
        assert!(within_sqrt((1 << 32) - 1, u64::MAX));
        assert!(!within_sqrt(1 << 32, u64::MAX));
        assert!(within_sqrt(1, 1));
        assert_eq!(
            factors(u64::from(u32::MAX)).unwrap().into_iter().collect::<Vec<_>>(),
            vec![1, 3, 5, 15, 17, 51, 85, 255, 257, 771, 1285, 3855, 4369, 13107, 21845, 65535, 65537, 196611, 327685, 983055, 1114129, 3342387, 5570645, 16711935, 16843009, 50529027, 84215045, 252645135, 286331153, 858993459, 1431655765, 4294967295]
        );
    }

    #[test]
    fn test_to_base_n() {
        assert_eq!(to_base_n(5, 2).unwrap(), "101");
        assert_eq!(to_base_n(35, 36).unwrap(), "z");
        assert_eq!(to_base_n(2022, 5).unwrap(), "31042");
        assert!(matches!(to_base_n(1, 37), Err(ToolkitError::InvalidArgument(_))));
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(7, 2).unwrap(), 3);
        assert_eq!(floor_div(-7, 2).unwrap(), -4);
        assert_eq!(floor_div(7, -2).unwrap(), -4);
        assert_eq!(floor_div(-7, -2).unwrap(), 3);
        assert_eq!(floor_div(-8, 2).unwrap(), -4);
        assert!(floor_div(1, 0).is_err());
    }

    fn in_union(intervals: &[Interval], v: i64) -> bool {
        intervals.iter().any(|&(lo, hi)| lo <= v && v <= hi)
    }

    proptest! {
        #[test]
        fn prop_base_n_round_trip(k in any::<u64>(), base in 2u32..=36) {
            let s = to_base_n(k, base).unwrap();
            prop_assert_eq!(u64::from_str_radix(&s, base).unwrap(), k);
            prop_assert!(s == "0" || !s.starts_with('0'));
        }

        #[test]
        fn prop_factors_are_divisor_pairs(n in 1u64..5000) {
            let fs = factors(n).unwrap();
            prop_assert!(fs.contains(&1) && fs.contains(&n));
            for &d in &fs {
                prop_assert!(fs.contains(&(n / d)));
            }
            let brute = (1..=n).filter(|d| n % d == 0).count();
            prop_assert_eq!(fs.len(), brute);
        }

        #[test]
        fn prop_merge_preserves_union(raw in prop::collection::vec((-50i64..50, 0i64..15), 0..12)) {
            let xs: Vec<Interval> = raw.iter().map(|&(lo, len)| (lo, lo + len)).collect();
            let merged = merge_intervals(&xs);
            for v in -60..70 {
                prop_assert_eq!(in_union(&xs, v), in_union(&merged, v));
            }
            for pair in merged.windows(2) {
                prop_assert!(pair[0].1 < pair[1].0);
            }
        }

        #[test]
        fn prop_binary_search_finds_present_values(start in -1000i64..1000, len in 0i64..500, pick in 0i64..500) {
            let hi = start + len;
            let expected = start + pick.min(len);
            let target = 3 * expected + 1;
            prop_assert_eq!(binary_search(target, start, hi, |x| 3 * x + 1, false), Some(expected));
        }
    }
}
