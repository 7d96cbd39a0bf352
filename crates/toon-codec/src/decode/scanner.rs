//! Raw line classification. The scanner does no unquoting and no header
//! parsing; it only splits each line into indentation plus a syntactic
//! shape, with the quote-aware colon search needed to keep `:` inside
//! quoted strings from splitting a line.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// Leading spaces.
    pub indent: usize,
    /// 1-based source line number, carried into every decode error.
    pub number: usize,
    pub kind: LineKind<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `- value` or a bare `-` introducing a nested element block.
    ListItem { value: Option<&'a str> },
    /// `key: value` or `key:` (array headers land here too; the parser
    /// interprets bracket segments inside the key token).
    KeyLine { key: &'a str, value: Option<&'a str> },
    /// No unquoted colon: a root scalar or a tabular data row.
    Scalar(&'a str),
}

pub fn scan(input: &str) -> Vec<ScannedLine<'_>> {
    input
        .split('\n')
        .enumerate()
        .map(|(i, raw)| parse_line(raw.strip_suffix('\r').unwrap_or(raw), i + 1))
        .collect()
}

fn parse_line(line: &str, number: usize) -> ScannedLine<'_> {
    let indent = leading_spaces(line);
    let body = &line[indent..];
    if body.trim().is_empty() {
        return ScannedLine {
            indent,
            number,
            kind: LineKind::Blank,
        };
    }
    if let Some(rest) = body.strip_prefix("- ") {
        return ScannedLine {
            indent,
            number,
            kind: LineKind::ListItem {
                value: Some(rest.trim_start_matches(' ')),
            },
        };
    }
    if body == "-" {
        return ScannedLine {
            indent,
            number,
            kind: LineKind::ListItem { value: None },
        };
    }
    if let Some(idx) = find_unquoted_colon(body) {
        let key = body[..idx].trim_end_matches(' ');
        let after = body[idx + 1..].trim_matches(' ');
        return ScannedLine {
            indent,
            number,
            kind: LineKind::KeyLine {
                key,
                value: if after.is_empty() { None } else { Some(after) },
            },
        };
    }
    ScannedLine {
        indent,
        number,
        kind: LineKind::Scalar(body),
    }
}

#[inline]
fn leading_spaces(s: &str) -> usize {
    s.as_bytes().iter().take_while(|&&b| b == b' ').count()
}

fn find_unquoted_colon(s: &str) -> Option<usize> {
    let mut in_str = false;
    let mut escape = false;
    for (i, &b) in s.as_bytes().iter().enumerate() {
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
        } else {
            match b {
                b'"' => in_str = true,
                b':' => return Some(i),
                _ => {}
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_line_shapes() {
        let lines = scan("a: 1\nb:\n  - x\n  -\n\nrow,row\n");
        assert_eq!(
            lines[0].kind,
            LineKind::KeyLine {
                key: "a",
                value: Some("1")
            }
        );
        assert_eq!(
            lines[1].kind,
            LineKind::KeyLine {
                key: "b",
                value: None
            }
        );
        assert_eq!(lines[2].kind, LineKind::ListItem { value: Some("x") });
        assert_eq!(lines[2].indent, 2);
        assert_eq!(lines[3].kind, LineKind::ListItem { value: None });
        assert_eq!(lines[4].kind, LineKind::Blank);
        assert_eq!(lines[5].kind, LineKind::Scalar("row,row"));
        assert_eq!(lines[5].number, 6);
    }

    #[test]
    fn quoted_colons_do_not_split() {
        let lines = scan("\"a:b\": 1\nmsg: \"x: y\"");
        assert_eq!(
            lines[0].kind,
            LineKind::KeyLine {
                key: "\"a:b\"",
                value: Some("1")
            }
        );
        assert_eq!(
            lines[1].kind,
            LineKind::KeyLine {
                key: "msg",
                value: Some("\"x: y\"")
            }
        );
    }
}
