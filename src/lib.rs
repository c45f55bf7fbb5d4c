//! Classic comparison sorts over caller-owned slices.
//!
//! Three algorithms share one contract: a mutable slice standing in for the half-open range
//! `[first, last)`, and an `is_less` comparator returning `true` iff its first argument must be
//! ordered strictly before its second. The comparator has to be a strict weak ordering. If it
//! isn't, the result is an unspecified permutation of the input, never lost or duplicated
//! elements.
//!
//! * [`insertion_sort`] stable, in place, linear on sorted input.
//! * [`shell_sort`] unstable, in place, Knuth gap sequence.
//! * [`merge_sort`] stable, bottom-up, needs a caller supplied scratch slice.
//!
//! Nothing in this crate allocates.

pub mod error;
pub mod stable;
pub mod unstable;

pub use error::SortError;
pub use stable::insertion::insertion_sort;
pub use stable::merge::merge_sort;
pub use unstable::shell::shell_sort;
