//! Scalar coercion of raw cell text
//!
//! Cells whose text is a JSON literal become typed values. Everything else
//! stays a string. Recognition never fails: unmatched text falls through.

use crate::types::CellValue;

/// Coerce raw cell text into a typed value
pub fn coerce(raw: &str) -> CellValue {
    let literal = raw.trim_matches(is_json_whitespace);

    let value = match literal.as_bytes().first() {
        Some(b'-' | b'0'..=b'9') => {
            if is_json_number(literal) {
                literal.parse::<f64>().ok().map(CellValue::Number)
            } else {
                None
            }
        }
        Some(b'"') => parse_json_string(literal).map(CellValue::String),
        Some(b't') if literal == "true" => Some(CellValue::Bool(true)),
        Some(b'f') if literal == "false" => Some(CellValue::Bool(false)),
        Some(b'n') if literal == "null" => Some(CellValue::Null),
        _ => None,
    };

    value.unwrap_or_else(|| CellValue::String(raw.to_string()))
}

fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
fn is_json_number(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i += count_digits(&bytes[i..]),
        _ => return false,
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let n = count_digits(&bytes[i..]);
        if n == 0 {
            return false;
        }
        i += n;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let n = count_digits(&bytes[i..]);
        if n == 0 {
            return false;
        }
        i += n;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Decode a complete double-quoted JSON string literal
fn parse_json_string(s: &str) -> Option<String> {
    let body = s.strip_prefix('"')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    loop {
        match chars.next()? {
            '"' => {
                // closing quote must end the literal
                return chars.as_str().is_empty().then_some(out);
            }
            '\\' => match chars.next()? {
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                '/' => out.push('/'),
                'b' => out.push('\u{0008}'),
                'f' => out.push('\u{000C}'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'u' => out.push(parse_unicode_escape(&mut chars)?),
                _ => return None,
            },
            c if (c as u32) < 0x20 => return None,
            c => out.push(c),
        }
    }
}

/// Decode the `XXXX` after `\u`, combining a following low surrogate if needed
fn parse_unicode_escape(chars: &mut std::str::Chars<'_>) -> Option<char> {
    let first = read_hex4(chars)?;

    match first {
        0xD800..=0xDBFF => {
            if chars.next()? != '\\' || chars.next()? != 'u' {
                return None;
            }
            let second = read_hex4(chars)?;
            if !(0xDC00..=0xDFFF).contains(&second) {
                return None;
            }
            let code = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
            char::from_u32(code)
        }
        0xDC00..=0xDFFF => None,
        _ => char::from_u32(first),
    }
}

fn read_hex4(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let mut value = 0;
    for _ in 0..4 {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}
