//! C string literal escaping.

/// Escape `value` for use between double quotes in C/C++ source.
///
/// Quotes, backslashes and control characters are escaped. Control
/// characters without a short escape use three-digit octal, which cannot
/// swallow a following digit the way `\x` escapes do. Non-ASCII text is
/// passed through as UTF-8.
pub fn escape_c_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Quote and escape `value` as a C string literal.
pub fn c_string_literal(value: &str) -> String {
    format!("\"{}\"", escape_c_string(value))
}
