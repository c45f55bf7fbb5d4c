// Unstable sorts, equal elements may be reordered.
pub mod shell;
