//! Bottom-up merge sort with an insertion sort base case.
//!
//! The slice is first cut into blocks of [`BASE_CASE_LEN`] that are sorted with insertion sort.
//! Then runs of doubling length are merged pairwise into the scratch slice and exchanged back,
//! until a single run spans the whole input. *O*(*n* \* log(*n*)) comparisons and moves regardless
//! of the input distribution.
//!
//! Elements are moved by swapping them with scratch slots, never cloned. The scratch slice is owned
//! by the caller and this module never allocates. Its contents before the call do not matter and
//! are unspecified afterwards, but every scratch element is still in `aux`.

use std::cmp::{self, Ordering};
use std::mem;

use crate::error::SortError;
use crate::stable::insertion;

/// Length of the blocks sorted by insertion sort before merging starts.
pub const BASE_CASE_LEN: usize = 16;

/// Sorts the slice, preserving the order of equal elements.
///
/// `aux` is scratch space and must hold at least `v.len()` elements, otherwise
/// [`SortError::AuxTooSmall`] is returned and `v` is left untouched.
#[inline]
pub fn sort<T>(v: &mut [T], aux: &mut [T]) -> Result<(), SortError>
where
    T: Ord,
{
    merge_sort(v, aux, |a, b| a.lt(b))
}

/// Sorts the slice with a comparator function, preserving the order of equal elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds
/// every element it held before.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], aux: &mut [T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, aux, |a, b| compare(a, b) == Ordering::Less)
}

/// Sorts the slice with a key extraction function, preserving the order of equal elements.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], aux: &mut [T], mut f: F) -> Result<(), SortError>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    merge_sort(v, aux, |a, b| f(a).lt(&f(b)))
}

/// Sorts `v` using `aux` as scratch, `is_less(a, b)` must return `true` iff `a` is ordered
/// strictly before `b`.
///
/// Fails with [`SortError::AuxTooSmall`] before touching anything if `aux.len() < v.len()`.
/// Extra scratch beyond `v.len()` is not used.
///
/// If `is_less` panics, `v` still holds exactly the elements it held before the call.
pub fn merge_sort<T, F>(v: &mut [T], aux: &mut [T], mut is_less: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if aux.len() < len {
        return Err(SortError::AuxTooSmall {
            required: len,
            provided: aux.len(),
        });
    }

    // Zero-sized types have no order to observe, and fewer than two elements are already sorted.
    if mem::size_of::<T>() == 0 || len < 2 {
        return Ok(());
    }

    let aux = &mut aux[..len];

    for block in v.chunks_mut(BASE_CASE_LEN) {
        insertion::insertion_sort_by_ref(block, &mut is_less);
    }

    let mut run_len = BASE_CASE_LEN;
    while run_len < len {
        merge_pass(v, aux, run_len, &mut is_less);
        run_len *= 2;
    }

    Ok(())
}

/// Merges every adjacent pair of `run_len` runs of `v`, leaving the result in `v`.
///
/// A lone trailing run has no partner this pass. It is already sorted and is never touched.
fn merge_pass<T, F>(v: &mut [T], aux: &mut [T], run_len: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut pass = MergePass {
        v,
        aux,
        merged: 0,
        lo: 0,
        mid: 0,
        taken_left: 0,
        taken_right: 0,
    };

    while run_len < len - pass.merged {
        let lo = pass.merged;
        let mid = lo + run_len;
        let hi = cmp::min(mid + run_len, len);

        pass.merge(lo, mid, hi, is_less);

        pass.merged = hi;
        pass.taken_left = 0;
        pass.taken_right = 0;
    }

    // Dropping `pass` exchanges the merged prefix back into `v`.
}

/// State of one merge pass. Elements are swapped from `v` into the same positions of `aux` in
/// merged order, so every element lives in exactly one of the two slices at all times.
///
/// On drop, finished and partial merges are swapped back into `v`. This is how a pass completes,
/// and it also keeps `v` a permutation of its input if `is_less` panics mid merge.
struct MergePass<'a, T> {
    v: &'a mut [T],
    aux: &'a mut [T],
    // `aux[..merged]` holds the completed merges of this pass.
    merged: usize,
    // Merge in flight: `taken_left` elements from `v[lo..mid]` and `taken_right` from
    // `v[mid..hi]` sit in `aux[lo..lo + taken_left + taken_right]`.
    lo: usize,
    mid: usize,
    taken_left: usize,
    taken_right: usize,
}

impl<T> MergePass<'_, T> {
    /// Stable two-pointer merge of the sorted runs `v[lo..mid]` and `v[mid..hi]` into
    /// `aux[lo..hi]`.
    ///
    /// The right head is only taken when it strictly precedes the left head, so ties come from the
    /// left run.
    fn merge<F>(&mut self, lo: usize, mid: usize, hi: usize, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(lo < mid && mid < hi && hi <= self.v.len());

        self.lo = lo;
        self.mid = mid;

        let mut out = lo;
        while lo + self.taken_left < mid && mid + self.taken_right < hi {
            let l = lo + self.taken_left;
            let r = mid + self.taken_right;

            if is_less(&self.v[r], &self.v[l]) {
                mem::swap(&mut self.aux[out], &mut self.v[r]);
                self.taken_right += 1;
            } else {
                mem::swap(&mut self.aux[out], &mut self.v[l]);
                self.taken_left += 1;
            }
            out += 1;
        }

        // One run is exhausted, the rest of the other one follows as is.
        let rest_left = lo + self.taken_left..mid;
        let rest_left_len = rest_left.len();
        self.aux[out..out + rest_left_len].swap_with_slice(&mut self.v[rest_left]);
        self.taken_left += rest_left_len;
        out += rest_left_len;

        self.aux[out..hi].swap_with_slice(&mut self.v[mid + self.taken_right..hi]);
        self.taken_right = hi - mid;
    }
}

impl<T> Drop for MergePass<'_, T> {
    fn drop(&mut self) {
        let merged = self.merged;
        self.v[..merged].swap_with_slice(&mut self.aux[..merged]);

        // The slots vacated in `v` by the merge in flight take back the elements moved out of
        // them, in merged order.
        let (lo, mid) = (self.lo, self.mid);
        let (l, r) = (self.taken_left, self.taken_right);
        self.v[lo..lo + l].swap_with_slice(&mut self.aux[lo..lo + l]);
        self.v[mid..mid + r].swap_with_slice(&mut self.aux[lo + l..lo + l + r]);
    }
}
