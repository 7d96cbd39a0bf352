//! Decoding pipeline: line scanning, indentation-tree parsing, path
//! expansion.

pub mod parser;
pub(crate) mod path_expand;
pub mod scanner;
