use anyhow::Result;
use regex::Regex;

/// Translates a SQL/OQL `LIKE` pattern into an anchored regex.
///
/// `%` matches any run of characters (including none), `_` matches exactly
/// one character, and everything else matches literally. Matching is
/// case-sensitive, as in OQL.
pub fn like_to_regex(pattern: &str) -> Result<Regex> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    let mut buf = [0u8; 4];

    expr.push('^');
    for ch in pattern.chars() {
        match ch {
            '%' => expr.push_str(".*"),
            '_' => expr.push('.'),
            other => expr.push_str(&regex::escape(other.encode_utf8(&mut buf))),
        }
    }
    expr.push('$');

    Ok(Regex::new(&expr)?)
}
