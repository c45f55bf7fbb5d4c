//! Shell sort with Knuth's gap sequence `1, 4, 13, 40, 121, ...`.
//!
//! Average *O*(*n*^(3/2)) comparisons on random input, in place, does not allocate. Elements that
//! compare equal can be moved past each other by the passes with gap > 1, so this sort is not
//! stable.

use std::cmp::Ordering;

/// Sorts the slice, but might not preserve the order of equal elements.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds
/// every element it held before.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    shell_sort(v, |a, b| f(a).lt(&f(b)));
}

/// Sorts `v` in place, `is_less(a, b)` must return `true` iff `a` is ordered strictly before `b`.
pub fn shell_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut gap = knuth_gap(len);
    while gap > 0 {
        h_sort(v, gap, &mut is_less);
        gap /= 3;
    }
}

/// Largest element `k` of `1, 4, 13, 40, ...` with `k < n / 3`, or 1 if there is none.
fn knuth_gap(n: usize) -> usize {
    let mut k = 1usize;

    // k < n / 3 without the rounding of integer division.
    loop {
        let next = k.saturating_mul(3).saturating_add(1);
        if next.saturating_mul(3) >= n {
            return k;
        }
        k = next;
    }
}

/// Insertion sort over the `gap` interleaved subsequences `v[r], v[r + gap], v[r + 2 * gap], ...`.
fn h_sort<T, F>(v: &mut [T], gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(gap > 0);

    for i in gap..v.len() {
        // Everything gap apart before i is already ordered, so stop at the first non-inversion.
        let mut j = i;
        while j >= gap && is_less(&v[j], &v[j - gap]) {
            v.swap(j, j - gap);
            j -= gap;
        }
    }
}
