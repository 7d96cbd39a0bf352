//! Expansion of dotted keys (`a.b.c: 1`) into nested objects.
//!
//! Runs while the parser finalizes each object, so collisions can point at
//! the source line of the offending key. Only unquoted keys whose segments
//! are all bare identifiers expand; quoted keys always stay literal.

use crate::encode::primitives::is_identifier;
use crate::error::{Error, Result};
use crate::value::Value;

/// One parsed object entry, before dotted-key expansion.
pub(crate) struct Entry {
    pub key: String,
    /// The key appeared quoted in the source, which opts it out of
    /// expansion.
    pub quoted: bool,
    /// Source line of the key, for collision reports.
    pub line: usize,
    pub value: Value,
}

/// Whether an entry's key will expand: unquoted, dotted, and every segment
/// a bare identifier.
pub(crate) fn should_expand(entry: &Entry) -> bool {
    !entry.quoted
        && entry.key.contains('.')
        && entry.key.split('.').all(is_identifier)
}

/// Expand and merge a finalized entry list into object pairs. Nested values
/// are already expanded by the time their parent object is built, so this
/// only looks at the top-level keys. In strict mode a merge that would
/// replace a scalar/array with an object (or the reverse) fails; in lenient
/// mode the later entry wins.
pub(crate) fn expand_entries(entries: Vec<Entry>, strict: bool) -> Result<Vec<(String, Value)>> {
    let mut out: Vec<(String, Value)> = Vec::with_capacity(entries.len());
    for entry in entries {
        if should_expand(&entry) {
            let mut segments = entry.key.split('.');
            let first = segments.next().expect("split yields at least one segment");
            let nested = build_nested(segments.rev(), entry.value);
            merge(&mut out, first.to_string(), nested, entry.line, strict)?;
        } else {
            let Entry {
                key, value, line, ..
            } = entry;
            merge(&mut out, key, value, line, strict)?;
        }
    }
    Ok(out)
}

/// Wrap `value` in one object layer per segment, innermost first.
fn build_nested<'a>(segments: impl Iterator<Item = &'a str>, value: Value) -> Value {
    let mut acc = value;
    for segment in segments {
        acc = Value::Object(vec![(segment.to_string(), acc)]);
    }
    acc
}

fn merge(
    target: &mut Vec<(String, Value)>,
    key: String,
    value: Value,
    line: usize,
    strict: bool,
) -> Result<()> {
    let Some(pos) = target.iter().position(|(k, _)| *k == key) else {
        target.push((key, value));
        return Ok(());
    };
    match (&mut target[pos].1, value) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (k, v) in incoming {
                merge(existing, k, v, line, strict)?;
            }
            Ok(())
        }
        (slot, value) => {
            if strict {
                return Err(Error::AmbiguousPathExpansion { line, path: key });
            }
            *slot = value;
            Ok(())
        }
    }
}
