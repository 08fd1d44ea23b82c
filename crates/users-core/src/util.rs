/// Parse a user id from a path segment.
///
/// Leading whitespace and an optional sign are accepted, then the longest
/// run of ASCII digits is read and anything after it is ignored:
/// `"12abc"` → `Some(12)`. Returns `None` when there are no digits or the
/// value does not fit in an `i64`; such an id matches no stored user.
pub fn parse_user_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
