//! Tabular-array analysis shared by the encoder and the decoder.
//!
//! An array is tabular-encodable when it is non-empty, every element is an
//! object, all elements carry exactly the same keys in the same order, and
//! every value is a scalar. The encoder uses this to pick the
//! `key[N]{f1,f2}:` layout; the decoder uses the duplicate-field check to
//! validate that a header's field list is self-consistent.

use crate::value::Value;

/// Returns the ordered field list when `items` is tabular-encodable.
pub fn tabular_fields(items: &[Value]) -> Option<Vec<&str>> {
    if items.is_empty() {
        return None;
    }
    let first = items[0].as_object()?;
    if first.is_empty() {
        return None;
    }
    let fields: Vec<&str> = first.iter().map(|(k, _)| k.as_str()).collect();
    if duplicate_field(&fields).is_some() {
        return None;
    }
    for item in items {
        let obj = item.as_object()?;
        if obj.len() != fields.len() {
            return None;
        }
        for ((k, v), want) in obj.iter().zip(&fields) {
            if k != want || !v.is_scalar() {
                return None;
            }
        }
    }
    Some(fields)
}

/// First field name that occurs more than once, if any.
pub fn duplicate_field<S: AsRef<str>>(fields: &[S]) -> Option<&str> {
    for (i, f) in fields.iter().enumerate() {
        if fields[..i].iter().any(|g| g.as_ref() == f.as_ref()) {
            return Some(f.as_ref());
        }
    }
    None
}
