use std::cmp::Ordering;

/// Sorts the slice, preserving the order of equal elements.
///
/// This sort is stable, in-place and *O*(*n*^2) worst-case. Already sorted or nearly sorted
/// input is handled in *O*(*n*).
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, preserving the order of equal elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds
/// every element it held before.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, preserving the order of equal elements.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    insertion_sort(v, |a, b| f(a).lt(&f(b)));
}

/// Sorts `v` in place, `is_less(a, b)` must return `true` iff `a` is ordered strictly before `b`.
///
/// Only adjacent elements are ever compared and swapped. An element stops moving at the first
/// predecessor it does not strictly precede, so equal elements never pass each other.
pub fn insertion_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    insertion_sort_by_ref(v, &mut is_less);
}

/// Same as [`insertion_sort`] but borrows the comparator, so callers that sort many sub-slices
/// can keep using theirs.
pub(crate) fn insertion_sort_by_ref<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
