//! Encoding pipeline: Value traversal, line emission, quoting, key folding.

pub mod encoders;
pub(crate) mod fold;
pub mod primitives;
pub mod writer;
