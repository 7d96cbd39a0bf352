use crate::decode::path_expand::{self, Entry};
use crate::decode::scanner::{LineKind, ScannedLine, scan};
use crate::error::{Error, Result};
use crate::number::has_forbidden_leading_zeros;
use crate::options::{DecodeOptions, Delimiter, ExpandPaths};
use crate::tabular;
use crate::value::{Number, Value};

/// Decode a TOON document into a [`Value`].
pub fn parse_document(input: &str, opts: &DecodeOptions) -> Result<Value> {
    opts.validate()?;
    Parser {
        lines: scan(input),
        idx: 0,
        opts,
    }
    .document()
}

/// Parsed form of a key token: the bare key plus an optional array header
/// (`key[N]`, `key[N|]{f1|f2}`, ...). Root-level headers have an empty key.
struct KeySpec {
    key: String,
    quoted: bool,
    header: Option<Header>,
}

struct Header {
    len: usize,
    /// Derived from the bracket segment; comma when no symbol is present.
    /// The options carry no decode-side delimiter, the document itself does.
    delim: Delimiter,
    /// Field list of a tabular header, each with its quoted flag.
    fields: Option<Vec<(String, bool)>>,
}

struct Parser<'a, 'o> {
    lines: Vec<ScannedLine<'a>>,
    idx: usize,
    opts: &'o DecodeOptions,
}

impl<'a> Parser<'a, '_> {
    fn strict(&self) -> bool {
        self.opts.strict
    }

    fn peek(&self) -> Option<ScannedLine<'a>> {
        self.lines.get(self.idx).cloned()
    }

    fn bump(&mut self) {
        self.idx += 1;
    }

    fn skip_blanks(&mut self) {
        while let Some(line) = self.lines.get(self.idx) {
            if matches!(line.kind, LineKind::Blank) {
                self.idx += 1;
            } else {
                break;
            }
        }
    }

    /// Depth in indent units. Strict mode rejects indentation that is not an
    /// exact multiple of the configured width; lenient mode floors it.
    fn depth_of(&self, line: &ScannedLine<'_>) -> Result<usize> {
        let size = self.opts.indent;
        if self.strict() && line.indent % size != 0 {
            return Err(Error::UnexpectedIndentation {
                line: line.number,
                message: format!(
                    "{} spaces is not a multiple of the indent width {}",
                    line.indent, size
                ),
            });
        }
        Ok(line.indent / size)
    }

    fn too_deep(&self, line: &ScannedLine<'_>, depth: usize) -> Error {
        Error::UnexpectedIndentation {
            line: line.number,
            message: format!(
                "expected {} spaces of indent, found {}",
                depth * self.opts.indent,
                line.indent
            ),
        }
    }

    fn document(&mut self) -> Result<Value> {
        self.skip_blanks();
        let Some(first) = self.peek() else {
            // An empty document is an empty object
            return Ok(Value::Object(Vec::new()));
        };
        if self.strict() && first.indent != 0 {
            return Err(Error::UnexpectedIndentation {
                line: first.number,
                message: "document must start at column 0".to_string(),
            });
        }
        let value = self.node(0)?;
        self.skip_blanks();
        if self.strict() {
            if let Some(extra) = self.peek() {
                return Err(Error::UnexpectedIndentation {
                    line: extra.number,
                    message: "content after the document root".to_string(),
                });
            }
        }
        Ok(value)
    }

    /// Parse the block starting at the current line, expected at `depth`.
    /// Returns an empty object when the block turns out to be empty.
    fn node(&mut self, depth: usize) -> Result<Value> {
        self.skip_blanks();
        let Some(line) = self.peek() else {
            return Ok(Value::Object(Vec::new()));
        };
        let d = self.depth_of(&line)?;
        if d < depth {
            return Ok(Value::Object(Vec::new()));
        }
        if d > depth && self.strict() {
            return Err(self.too_deep(&line, depth));
        }
        match line.kind {
            LineKind::KeyLine { key, value } => {
                let spec = self.parse_key_spec(key, line.number)?;
                if spec.key.is_empty() {
                    if let Some(header) = spec.header {
                        return self.array_value(header, value, depth, line.number);
                    }
                }
                self.object(depth)
            }
            LineKind::Scalar(s) => {
                self.bump();
                self.parse_scalar_token(s, line.number)
            }
            LineKind::ListItem { .. } => Err(Error::MalformedHeader {
                line: line.number,
                message: "list item outside an array block".to_string(),
            }),
            LineKind::Blank => unreachable!("blank lines are skipped"),
        }
    }

    fn object(&mut self, depth: usize) -> Result<Value> {
        let mut entries: Vec<Entry> = Vec::new();
        loop {
            self.skip_blanks();
            let Some(line) = self.peek() else {
                break;
            };
            let d = self.depth_of(&line)?;
            if d < depth {
                break;
            }
            if d > depth && self.strict() {
                return Err(self.too_deep(&line, depth));
            }
            match line.kind {
                LineKind::KeyLine { key, value } => {
                    let spec = self.parse_key_spec(key, line.number)?;
                    if spec.key.is_empty() && spec.header.is_some() {
                        if self.strict() {
                            return Err(Error::MalformedHeader {
                                line: line.number,
                                message: "array header without a key inside an object".to_string(),
                            });
                        }
                        self.bump();
                        continue;
                    }
                    let val = if let Some(header) = spec.header {
                        self.array_value(header, value, depth, line.number)?
                    } else if let Some(v) = value {
                        self.bump();
                        self.parse_scalar_token(v, line.number)?
                    } else {
                        self.bump();
                        if self.block_follows(depth)? {
                            self.node(depth + 1)?
                        } else {
                            // `key:` with nothing nested is an empty object
                            Value::Object(Vec::new())
                        }
                    };
                    entries.push(Entry {
                        key: spec.key,
                        quoted: spec.quoted,
                        line: line.number,
                        value: val,
                    });
                }
                LineKind::ListItem { .. } | LineKind::Scalar(_) => {
                    if self.strict() {
                        return Err(Error::UnexpectedIndentation {
                            line: line.number,
                            message: "expected a key line".to_string(),
                        });
                    }
                    // Best effort: drop the stray line
                    self.bump();
                }
                LineKind::Blank => unreachable!("blank lines are skipped"),
            }
        }
        self.finish_object(entries)
    }

    fn block_follows(&mut self, depth: usize) -> Result<bool> {
        self.skip_blanks();
        let Some(line) = self.peek() else {
            return Ok(false);
        };
        Ok(self.depth_of(&line)? > depth)
    }

    /// Duplicate-key check and optional path expansion, shared by plain
    /// objects and tabular rows.
    fn finish_object(&self, entries: Vec<Entry>) -> Result<Value> {
        let expanding = self.opts.expand_paths == ExpandPaths::Safe;
        let mut deduped: Vec<Entry> = Vec::with_capacity(entries.len());
        for entry in entries {
            // Under expansion a bare `a.b` and a quoted `"a.b"` name
            // different locations, so same-name keys only collide when
            // their expansion behavior matches.
            if let Some(pos) = deduped.iter().position(|e| {
                e.key == entry.key
                    && (!expanding
                        || path_expand::should_expand(e) == path_expand::should_expand(&entry))
            }) {
                if self.strict() {
                    return Err(Error::DuplicateKey {
                        line: entry.line,
                        key: entry.key,
                    });
                }
                // Last occurrence wins, keeping the original position
                deduped[pos] = entry;
            } else {
                deduped.push(entry);
            }
        }
        let pairs = if self.opts.expand_paths == ExpandPaths::Safe {
            path_expand::expand_entries(deduped, self.strict())?
        } else {
            deduped.into_iter().map(|e| (e.key, e.value)).collect()
        };
        Ok(Value::Object(pairs))
    }

    /// Dispatch on array layout once a header has been recognized. The
    /// header line is consumed here.
    fn array_value(
        &mut self,
        header: Header,
        inline: Option<&str>,
        depth: usize,
        line_no: usize,
    ) -> Result<Value> {
        self.bump();
        match (&header.fields, inline) {
            (Some(_), Some(_)) => Err(Error::MalformedHeader {
                line: line_no,
                message: "tabular header cannot carry an inline value".to_string(),
            }),
            (None, Some(raw)) => self.inline_array(&header, raw, line_no),
            (Some(_), None) => self.tabular_array(header, depth, line_no),
            (None, None) => self.list_array(&header, depth, line_no),
        }
    }

    fn inline_array(&self, header: &Header, raw: &str, line_no: usize) -> Result<Value> {
        let cells = split_delim_aware(raw, header.delim.as_char());
        if self.strict() && cells.len() != header.len {
            return Err(Error::ArrayLengthMismatch {
                line: line_no,
                declared: header.len,
                found: cells.len(),
            });
        }
        let items = cells
            .iter()
            .map(|c| self.parse_scalar_token(c, line_no))
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::Array(items))
    }

    fn tabular_array(&mut self, header: Header, depth: usize, header_line: usize) -> Result<Value> {
        let fields = header.fields.expect("caller checked for fields");
        if self.strict() {
            let names: Vec<&str> = fields.iter().map(|(n, _)| n.as_str()).collect();
            if let Some(dup) = tabular::duplicate_field(&names) {
                return Err(Error::DuplicateKey {
                    line: header_line,
                    key: dup.to_string(),
                });
            }
        }
        let dch = header.delim.as_char();
        let mut rows: Vec<Value> = Vec::new();
        loop {
            self.skip_blanks();
            let Some(line) = self.peek() else {
                break;
            };
            let d = self.depth_of(&line)?;
            if d <= depth {
                break;
            }
            if d > depth + 1 && self.strict() {
                return Err(self.too_deep(&line, depth + 1));
            }
            let LineKind::Scalar(raw) = line.kind else {
                if self.strict() {
                    return Err(Error::MalformedHeader {
                        line: line.number,
                        message: "expected a table row".to_string(),
                    });
                }
                break;
            };
            self.bump();
            let cells = split_delim_aware(raw, dch);
            if self.strict() && cells.len() != fields.len() {
                return Err(Error::FieldCountMismatch {
                    line: line.number,
                    expected: fields.len(),
                    found: cells.len(),
                });
            }
            let mut entries = Vec::with_capacity(fields.len());
            for (i, (name, quoted)) in fields.iter().enumerate() {
                // Lenient short rows pad with null; extra cells are dropped
                let value = match cells.get(i) {
                    Some(cell) => self.parse_scalar_token(cell, line.number)?,
                    None => Value::Null,
                };
                entries.push(Entry {
                    key: name.clone(),
                    quoted: *quoted,
                    line: line.number,
                    value,
                });
            }
            rows.push(self.finish_object(entries)?);
        }
        if self.strict() && rows.len() != header.len {
            return Err(Error::ArrayLengthMismatch {
                line: header_line,
                declared: header.len,
                found: rows.len(),
            });
        }
        Ok(Value::Array(rows))
    }

    fn list_array(&mut self, header: &Header, depth: usize, header_line: usize) -> Result<Value> {
        let mut items: Vec<Value> = Vec::new();
        loop {
            self.skip_blanks();
            let Some(line) = self.peek() else {
                break;
            };
            let d = self.depth_of(&line)?;
            if d <= depth {
                break;
            }
            if d > depth + 1 && self.strict() {
                return Err(self.too_deep(&line, depth + 1));
            }
            match line.kind {
                LineKind::ListItem { value: Some(v) } => {
                    self.bump();
                    items.push(self.parse_scalar_token(v, line.number)?);
                }
                LineKind::ListItem { value: None } => {
                    self.bump();
                    items.push(self.node(depth + 2)?);
                }
                _ => {
                    if self.strict() {
                        return Err(Error::MalformedHeader {
                            line: line.number,
                            message: "expected a list item".to_string(),
                        });
                    }
                    break;
                }
            }
        }
        if self.strict() && items.len() != header.len {
            return Err(Error::ArrayLengthMismatch {
                line: header_line,
                declared: header.len,
                found: items.len(),
            });
        }
        Ok(Value::Array(items))
    }

    fn parse_key_spec(&self, raw: &str, line_no: usize) -> Result<KeySpec> {
        let raw = raw.trim_matches(' ');
        if let Some(rest) = raw.strip_prefix('"') {
            let (key, consumed) =
                unescape_prefix(rest).ok_or(Error::UnterminatedBlock { line: line_no })?;
            let after = &rest[consumed..];
            let header = if after.is_empty() {
                None
            } else {
                Some(self.parse_header(after, line_no)?)
            };
            return Ok(KeySpec {
                key,
                quoted: true,
                header,
            });
        }
        match raw.find('[') {
            Some(pos) => {
                let header = self.parse_header(&raw[pos..], line_no)?;
                Ok(KeySpec {
                    key: raw[..pos].to_string(),
                    quoted: false,
                    header: Some(header),
                })
            }
            None => Ok(KeySpec {
                key: raw.to_string(),
                quoted: false,
                header: None,
            }),
        }
    }

    /// Parse `[N]`, `[N|]{a|b}`, `[N]{a,b}` ... starting at the `[`.
    fn parse_header(&self, s: &str, line_no: usize) -> Result<Header> {
        let malformed = |message: &str| Error::MalformedHeader {
            line: line_no,
            message: message.to_string(),
        };
        let body = s.strip_prefix('[').ok_or_else(|| malformed("expected `[`"))?;
        let close = body.find(']').ok_or_else(|| malformed("missing `]`"))?;
        let mut digits = &body[..close];
        let mut delim = Delimiter::Comma;
        if let Some(stripped) = digits.strip_suffix(['|', '\t']) {
            delim = if digits.ends_with('|') {
                Delimiter::Pipe
            } else {
                Delimiter::Tab
            };
            digits = stripped;
        }
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("array length must be an unsigned integer"));
        }
        let len: usize = digits
            .parse()
            .map_err(|_| malformed("array length out of range"))?;

        let after = &body[close + 1..];
        let fields = if after.is_empty() {
            None
        } else {
            let inner = after
                .strip_prefix('{')
                .ok_or_else(|| malformed("unexpected text after `]`"))?
                .strip_suffix('}')
                .ok_or_else(|| malformed("missing `}`"))?;
            let tokens = split_delim_aware(inner, delim.as_char());
            if tokens.is_empty() {
                return Err(malformed("empty field list"));
            }
            let mut fields = Vec::with_capacity(tokens.len());
            for token in tokens {
                if let Some(rest) = token.strip_prefix('"') {
                    let (name, consumed) =
                        unescape_prefix(rest).ok_or(Error::UnterminatedBlock { line: line_no })?;
                    if !rest[consumed..].is_empty() {
                        return Err(malformed("unexpected text after quoted field name"));
                    }
                    fields.push((name, true));
                } else {
                    fields.push((token.to_string(), false));
                }
            }
            Some(fields)
        };
        Ok(Header { len, delim, fields })
    }

    fn parse_scalar_token(&self, s: &str, line_no: usize) -> Result<Value> {
        let s = s.trim_matches(' ');
        if let Some(rest) = s.strip_prefix('"') {
            return match unescape_prefix(rest) {
                Some((text, consumed)) if rest[consumed..].trim_matches(' ').is_empty() => {
                    Ok(Value::String(text))
                }
                // Trailing text after the closing quote: keep the raw token
                Some(_) => Ok(Value::String(s.to_string())),
                None => Err(Error::UnterminatedBlock { line: line_no }),
            };
        }
        match s {
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            "null" => return Ok(Value::Null),
            _ => {}
        }
        if has_forbidden_leading_zeros(s) {
            return Ok(Value::String(s.to_string()));
        }
        // Fast path for plain integers
        let bytes = s.as_bytes();
        if !bytes.is_empty() {
            if bytes[0] == b'-' {
                if bytes.len() > 1 && bytes[1..].iter().all(u8::is_ascii_digit) {
                    if let Ok(i) = s.parse::<i64>() {
                        return Ok(Value::Number(Number::I64(i)));
                    }
                }
            } else if bytes.iter().all(u8::is_ascii_digit) {
                if let Ok(u) = s.parse::<u64>() {
                    return Ok(Value::Number(Number::U64(u)));
                }
            }
        }
        if looks_numeric(s) {
            if let Ok(f) = s.parse::<f64>() {
                return Ok(Value::Number(Number::F64(f)));
            }
        }
        Ok(Value::String(s.to_string()))
    }
}

/// Split on `delim` outside quoted strings; tokens are trimmed and empty
/// tokens dropped.
fn split_delim_aware(s: &str, delim: char) -> Vec<&str> {
    let bytes = s.as_bytes();
    let delim = delim as u8;
    let mut out: Vec<&str> = Vec::new();
    let mut in_str = false;
    let mut escape = false;
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        if in_str {
            if escape {
                escape = false;
                continue;
            }
            match b {
                b'\\' => escape = true,
                b'"' => in_str = false,
                _ => {}
            }
        } else if b == b'"' {
            in_str = true;
        } else if b == delim {
            let token = s[start..i].trim_matches(' ');
            if !token.is_empty() {
                out.push(token);
            }
            start = i + 1;
        }
    }
    if start < bytes.len() {
        let token = s[start..].trim_matches(' ');
        if !token.is_empty() {
            out.push(token);
        }
    }
    out
}

/// Unescape a JSON-style string body that starts right after the opening
/// quote. Returns the decoded text and the number of input bytes consumed,
/// including the closing quote. `None` when the quote never closes or an
/// escape is invalid.
fn unescape_prefix(s: &str) -> Option<(String, usize)> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.char_indices();
    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' => return Some((out, i + 1)),
            '\\' => match chars.next()?.1 {
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                '/' => out.push('/'),
                'b' => out.push('\u{0008}'),
                'f' => out.push('\u{000C}'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'u' => {
                    let mut code = 0u32;
                    for _ in 0..4 {
                        let (_, d) = chars.next()?;
                        code = (code << 4) | d.to_digit(16)?;
                    }
                    out.push(char::from_u32(code)?);
                }
                _ => return None,
            },
            c => out.push(c),
        }
    }
    None
}

/// Shape check before attempting an f64 parse: digits with at most one dot
/// and one exponent, signs only where a number allows them.
fn looks_numeric(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0usize;
    if bytes[0] == b'-' || bytes[0] == b'+' {
        i = 1;
    }
    if i >= bytes.len() {
        return false;
    }
    let mut has_digit = false;
    let mut has_dot = false;
    let mut has_exp = false;
    let mut exp_sign_ok = false;
    for &b in &bytes[i..] {
        match b {
            b'0'..=b'9' => {
                has_digit = true;
                exp_sign_ok = false;
            }
            b'.' => {
                if has_dot || has_exp {
                    return false;
                }
                has_dot = true;
            }
            b'e' | b'E' => {
                if has_exp || !has_digit {
                    return false;
                }
                has_exp = true;
                exp_sign_ok = true;
            }
            b'-' | b'+' => {
                if !exp_sign_ok {
                    return false;
                }
                exp_sign_ok = false;
            }
            _ => return false,
        }
    }
    has_digit
}
