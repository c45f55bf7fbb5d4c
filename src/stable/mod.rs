// Stable sorts, equal elements keep their input order.
pub mod insertion;
pub mod merge;
