/// Format a finite f64 in canonical TOON form:
/// - plain decimal notation, never an exponent
/// - no trailing fractional zeros (the decimal point goes too if nothing is left)
/// - -0 normalized to 0
pub(crate) fn format_canonical_f64(value: f64) -> String {
    if !value.is_finite() {
        debug_assert!(false, "format_canonical_f64 called with non-finite value");
        return String::from("null");
    }
    if value == 0.0 {
        return String::from("0");
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(magnitude);
    let body = if let Some(exp_index) = raw.find(['e', 'E']) {
        let mantissa = &raw[..exp_index];
        let exp: i32 = raw[exp_index + 1..].parse().unwrap_or(0);
        expand_exponent(mantissa, exp)
    } else {
        String::from(raw)
    };
    let trimmed = trim_fraction(body);
    if trimmed == "0" {
        return String::from("0");
    }
    if negative {
        let mut out = String::with_capacity(trimmed.len() + 1);
        out.push('-');
        out.push_str(&trimmed);
        out
    } else {
        trimmed
    }
}

/// Numeric-looking tokens with a superfluous leading zero (`05`, `-012`) must
/// not be read back as numbers; the decoder keeps them as strings.
pub(crate) fn has_forbidden_leading_zeros(token: &str) -> bool {
    let token = token.trim();
    let token = token.strip_prefix(['-', '+']).unwrap_or(token);
    if token.len() <= 1 {
        return false;
    }
    let bytes = token.as_bytes();
    if bytes[0] != b'0' {
        return false;
    }
    // "0.5" and "0e3" are fine; "05" is not.
    !matches!(bytes[1], b'.' | b'e' | b'E')
}

/// Rewrite `mantissa * 10^exp` as plain decimal digits.
fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(mantissa.len());
    let mut point_index = None;
    for &b in mantissa.as_bytes() {
        if b == b'.' {
            point_index = Some(digits.len());
        } else {
            digits.push(b);
        }
    }
    let point_index = point_index.unwrap_or(digits.len());

    let target = point_index as i32 + exp;
    let mut out = String::with_capacity(digits.len() + exp.unsigned_abs() as usize + 2);
    if target <= 0 {
        out.push_str("0.");
        for _ in 0..(-target) as usize {
            out.push('0');
        }
        for &d in &digits {
            out.push(d as char);
        }
    } else if target as usize >= digits.len() {
        for &d in &digits {
            out.push(d as char);
        }
        for _ in 0..(target as usize - digits.len()) {
            out.push('0');
        }
    } else {
        for (idx, &d) in digits.iter().enumerate() {
            if idx == target as usize {
                out.push('.');
            }
            out.push(d as char);
        }
    }
    out
}

fn trim_fraction(mut s: String) -> String {
    if let Some(dot_pos) = s.find('.') {
        let mut end = s.len();
        while end > dot_pos + 1 && s.as_bytes()[end - 1] == b'0' {
            end -= 1;
        }
        if s.as_bytes()[end - 1] == b'.' {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}
