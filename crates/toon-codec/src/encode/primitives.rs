use crate::number::format_canonical_f64;
use crate::options::Delimiter;

/// Format the bracket segment of an array header: `[N]` for comma, `[N|]` /
/// `[N<TAB>]` for the other delimiters so the decoder can recover the
/// delimiter from the header alone.
pub fn bracket_segment(len: usize, delim: Delimiter) -> String {
    match delim {
        Delimiter::Comma => format!("[{}]", len),
        other => format!("[{}{}]", len, other.as_char()),
    }
}

/// Format the `{f1,f2,...}` field segment of a tabular header.
pub fn fields_segment(fields: &[&str], delim: Delimiter) -> String {
    let dch = delim.as_char();
    let mut out = String::from("{");
    for (i, f) in fields.iter().enumerate() {
        if i > 0 {
            out.push(dch);
        }
        out.push_str(&format_key(f));
    }
    out.push('}');
    out
}

fn is_control(c: char) -> bool {
    let u = c as u32;
    u < 0x20 || u == 0x7F
}

fn looks_like_literal(s: &str) -> bool {
    if matches!(s, "true" | "false" | "null") {
        return true;
    }
    let sn = s.trim();
    let body = sn.strip_prefix(['+', '-']).unwrap_or(sn);
    !body.is_empty() && body.parse::<f64>().is_ok()
}

/// A scalar needs quoting when leaving it bare would change its meaning on
/// the way back: structural characters, the active delimiter, surrounding
/// whitespace, or a spelling that reads as a number/boolean/null.
pub fn needs_quotes(s: &str, delim: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }
    // A leading hyphen collides with the list item marker
    if s.starts_with('-') {
        return true;
    }
    if s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }
    if s.contains(delim.as_char()) {
        return true;
    }
    if s.contains(':') {
        return true;
    }
    if s.chars().any(|c| matches!(c, '[' | ']' | '{' | '}')) {
        return true;
    }
    if s.chars().any(|c| c == '"' || c == '\\' || is_control(c)) {
        return true;
    }
    looks_like_literal(s)
}

pub fn escape_and_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if is_control(c) => {
                use core::fmt::Write as _;
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn format_string(s: &str, delim: Delimiter) -> String {
    if needs_quotes(s, delim) {
        escape_and_quote(s)
    } else {
        s.to_string()
    }
}

/// A bare identifier: `[A-Za-z_][A-Za-z0-9_]*`. Folded-path segments and
/// expandable key segments must satisfy this.
pub(crate) fn is_identifier(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != b'_' {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Literal keys stay unquoted only when they are bare identifiers. A dot
/// forces quotes: an unquoted dotted key would read back as an expandable
/// path, not a literal name. Folded paths never come through here; see
/// [`format_folded_path`].
pub fn format_key(s: &str) -> String {
    if is_identifier(s) {
        s.to_string()
    } else {
        escape_and_quote(s)
    }
}

/// Join folded path segments with dots. Each segment is a bare identifier
/// (the folder refuses anything else), so the result needs no quoting.
pub(crate) fn format_folded_path(segments: &[&str]) -> String {
    debug_assert!(segments.iter().all(|s| is_identifier(s)));
    segments.join(".")
}

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}

pub fn format_f64(f: f64) -> String {
    format_canonical_f64(f)
}
