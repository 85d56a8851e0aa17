// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Mapping, Value};

/// Convert a raw token into a typed value. First matching rule wins:
/// inline list, inline map, null, bool, int, float, hex int, quoted string,
/// and finally the token itself as a string.
///
/// Inline lists and maps split naively on `,` (and `:` for map entries), so
/// nested brackets or quoted commas are not protected.
pub fn parse_scalar(token: &str) -> Value {
    if let Some(inner) = wrapped(token, '[', ']') {
        return Value::Sequence(
            inner
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(parse_scalar)
                .collect(),
        );
    }

    if let Some(inner) = wrapped(token, '{', '}') {
        let mut entries = Mapping::new();
        for pair in inner.split(',') {
            if let Some((key, value)) = pair.trim().split_once(':') {
                let value = value.trim();
                if !value.is_empty() {
                    entries.insert(key.trim().to_string(), parse_scalar(value));
                }
            }
        }
        return Value::Mapping(entries);
    }

    match token {
        "null" | "~" | "undefined" => return Value::Null,
        "true" | "yes" => return Value::Bool(true),
        "false" | "no" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(n) = token.parse::<i64>() {
        return Value::Int(n);
    }

    if looks_numeric(token) {
        if let Ok(f) = token.parse::<f64>() {
            return Value::Float(f);
        }
    }

    if let Some(digits) = token.strip_prefix("0x").filter(|d| !d.is_empty()) {
        if let Ok(n) = i64::from_str_radix(digits, 16) {
            return Value::Int(n);
        }
    }

    if let Some(inner) = wrapped(token, '"', '"').or_else(|| wrapped(token, '\'', '\'')) {
        return Value::String(inner.to_string());
    }

    Value::String(token.to_string())
}

fn wrapped(token: &str, open: char, close: char) -> Option<&str> {
    if token.len() >= 2 {
        token.strip_prefix(open)?.strip_suffix(close)
    } else {
        None
    }
}

/// Keeps words like `inf` or `NaN` strings rather than floats.
fn looks_numeric(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
        && token.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}
