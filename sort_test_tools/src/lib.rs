//! Shared input patterns and test suite for the sorts in `sort_basics`.

/// Uniform front-end over one sort implementation, so the same tests and benchmarks can be
/// stamped out for every algorithm.
pub trait Sort {
    fn name() -> String;

    /// Largest input length the shared tests should feed this implementation. Quadratic sorts
    /// override this to keep the suite fast.
    fn max_test_len() -> usize {
        usize::MAX
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
pub mod types;
