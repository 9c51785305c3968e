use crate::error::ParseError;

/// Unescapes a string literal's inner text (without the surrounding
/// quotes), supporting the standard backslash escapes.
pub fn unescape(raw: &str) -> Result<String, ParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => return Err(ParseError::InvalidEscape(format!("\\{}", other))),
            None => return Err(ParseError::InvalidEscape("\\".to_string())),
        }
    }
    Ok(out)
}
