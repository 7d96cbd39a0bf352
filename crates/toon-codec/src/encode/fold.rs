//! Safe key folding: `{a: {b: {c: 1}}}` becomes `a.b.c: 1`.

use crate::encode::primitives::{format_folded_path, is_identifier};
use crate::value::Value;

/// Follow the longest chain of single-key objects starting at `key` and
/// return the folded dotted path plus the value left at the end of the
/// chain. Folding stops at any segment that is not a bare identifier (the
/// ambiguity guard: dots or characters that would force quoting make the
/// folded path undecodable). `None` when no fold applies; the returned path
/// is already in output form and must not be re-quoted.
pub(crate) fn fold_entry<'v>(key: &str, value: &'v Value) -> Option<(String, &'v Value)> {
    if !is_identifier(key) {
        return None;
    }
    let mut segments: Vec<&str> = vec![key];
    let mut leaf = value;
    while let Value::Object(entries) = leaf {
        let [(next_key, next_value)] = entries.as_slice() else {
            break;
        };
        if !is_identifier(next_key) {
            break;
        }
        segments.push(next_key);
        leaf = next_value;
    }
    if segments.len() == 1 {
        None
    } else {
        Some((format_folded_path(&segments), leaf))
    }
}
