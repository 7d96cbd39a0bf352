use crate::encode::{fold, primitives, writer::LineWriter};
use crate::error::Result;
use crate::options::{EncodeOptions, KeyFolding};
use crate::tabular;
use crate::value::{Number, Value};

/// Scalar arrays whose joined cell text stays within this many characters
/// are emitted inline (`key[N]: a,b,c`); longer ones use list form.
const INLINE_CELL_LIMIT: usize = 120;

/// Encode a whole document. Pure function of the inputs; fails only on
/// invalid options, checked before any traversal.
pub fn encode_document(value: &Value, opts: &EncodeOptions) -> Result<String> {
    opts.validate()?;
    let mut w = LineWriter::new();
    match value {
        Value::Object(entries) => encode_entries(entries, &mut w, opts, 0),
        Value::Array(items) => encode_array(None, items, &mut w, opts, 0),
        scalar => w.line(0, &scalar_text(scalar, opts)),
    }
    Ok(w.into_string())
}

fn scalar_text(value: &Value, opts: &EncodeOptions) -> String {
    match value {
        Value::Null => primitives::format_null().to_string(),
        Value::Bool(b) => primitives::format_bool(*b).to_string(),
        Value::Number(n) => match n {
            Number::I64(i) => i.to_string(),
            Number::U64(u) => u.to_string(),
            Number::F64(f) => primitives::format_f64(*f),
        },
        Value::String(s) => primitives::format_string(s, opts.delimiter),
        Value::Array(_) | Value::Object(_) => unreachable!("scalar_text on container"),
    }
}

fn encode_entries(
    entries: &[(String, Value)],
    w: &mut LineWriter,
    opts: &EncodeOptions,
    depth: usize,
) {
    let pad = depth * opts.indent;
    for (raw_key, raw_value) in entries {
        // A folded path comes back already formatted; a literal key still
        // needs the quoting pass.
        let (key_txt, value) = match opts.key_folding {
            KeyFolding::Safe => fold::fold_entry(raw_key, raw_value),
            KeyFolding::Off => None,
        }
        .unwrap_or_else(|| (primitives::format_key(raw_key), raw_value));
        match value {
            Value::Object(inner) if inner.is_empty() => w.line_key_only(pad, &key_txt),
            Value::Object(inner) => {
                w.line_key_only(pad, &key_txt);
                encode_entries(inner, w, opts, depth + 1);
            }
            Value::Array(items) => encode_array(Some(&key_txt), items, w, opts, depth),
            scalar => w.line_kv(pad, &key_txt, &scalar_text(scalar, opts)),
        }
    }
}

/// Array layout dispatch: tabular header + rows when eligible, inline cell
/// list for short scalar arrays, `-` list form otherwise. `key` is the
/// already-formatted key text, absent for root-level arrays.
fn encode_array(
    key: Option<&str>,
    items: &[Value],
    w: &mut LineWriter,
    opts: &EncodeOptions,
    depth: usize,
) {
    let pad = depth * opts.indent;
    let prefix = key.unwrap_or("");
    let bracket = primitives::bracket_segment(items.len(), opts.delimiter);

    if items.is_empty() {
        w.line_key_only(pad, &format!("{}{}", prefix, bracket));
        return;
    }

    if let Some(fields) = tabular::tabular_fields(items) {
        let header = format!(
            "{}{}{}",
            prefix,
            bracket,
            primitives::fields_segment(&fields, opts.delimiter)
        );
        w.line_key_only(pad, &header);
        let dch = opts.delimiter.as_char();
        let mut row = String::new();
        for item in items {
            row.clear();
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    row.push(dch);
                }
                // Field order is fixed by the header; values are taken by key
                // lookup, never re-sorted.
                let cell = item.get(field).expect("tabular detection guarantees key");
                row.push_str(&scalar_text(cell, opts));
            }
            w.line(pad + opts.indent, &row);
        }
        return;
    }

    if items.iter().all(Value::is_scalar) {
        let cells: Vec<String> = items.iter().map(|v| scalar_text(v, opts)).collect();
        let joined = cells.join(&opts.delimiter.as_char().to_string());
        if joined.len() <= INLINE_CELL_LIMIT {
            w.line_kv(pad, &format!("{}{}", prefix, bracket), &joined);
        } else {
            w.line_key_only(pad, &format!("{}{}", prefix, bracket));
            for cell in &cells {
                w.line_list_item(pad + opts.indent, cell);
            }
        }
        return;
    }

    // Mixed or nested elements: one `-`-marked block per element so the
    // decoder can tell array membership apart from plain object nesting.
    w.line_key_only(pad, &format!("{}{}", prefix, bracket));
    for item in items {
        match item {
            Value::Object(inner) if inner.is_empty() => w.line_list_marker(pad + opts.indent),
            Value::Object(inner) => {
                w.line_list_marker(pad + opts.indent);
                encode_entries(inner, w, opts, depth + 2);
            }
            Value::Array(inner) => {
                w.line_list_marker(pad + opts.indent);
                encode_array(None, inner, w, opts, depth + 2);
            }
            scalar => w.line_list_item(pad + opts.indent, &scalar_text(scalar, opts)),
        }
    }
}
