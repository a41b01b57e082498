//! Shape checks shared by every record schema.
//!
//! Both checks are purely structural. Neither consults a calendar, a locale
//! or a currency table.

/// Number of bytes in the shortest accepted date prefix, `DD.MM.YY`.
const DATE_PREFIX_LEN: usize = 8;

/// Returns `true` when `value` starts with a `DD.MM.YY` or `DD.MM.YYYY` shape.
///
/// The match is anchored at the start only, so trailing content after a
/// well-shaped prefix is accepted. Calendar validity is not checked.
///
/// # Examples
///
/// ```
/// use tallybook::record::domain::is_date_shape;
///
/// assert!(is_date_shape("24.12.2024"));
/// assert!(is_date_shape("24.12.24"));
/// assert!(is_date_shape("32.13.99"));
/// assert!(!is_date_shape("2024-12-24"));
/// ```
#[must_use]
pub fn is_date_shape(value: &str) -> bool {
    let Some(prefix) = value.as_bytes().get(..DATE_PREFIX_LEN) else {
        return false;
    };
    matches!(
        prefix,
        [d0, d1, b'.', m0, m1, b'.', y0, y1]
            if [d0, d1, m0, m1, y0, y1].iter().all(|byte| byte.is_ascii_digit())
    )
}

/// Returns the numeric prefix of `value` after trimming, if there is one.
///
/// The prefix is one or more ASCII digits, optionally followed by a single
/// `.` or `,` and at least one more digit. A separator with no digit after it
/// is not part of the prefix.
///
/// # Examples
///
/// ```
/// use tallybook::record::domain::leading_amount;
///
/// assert_eq!(leading_amount("12,5 EUR"), Some("12,5"));
/// assert_eq!(leading_amount(" 500 USD "), Some("500"));
/// assert_eq!(leading_amount("500. USD"), Some("500"));
/// assert_eq!(leading_amount("USD 500"), None);
/// ```
#[must_use]
pub fn leading_amount(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();

    let integer_len = count_leading_digits(bytes);
    if integer_len == 0 {
        return None;
    }

    let fraction_len = match bytes.get(integer_len) {
        Some(b'.' | b',') => bytes
            .get(integer_len.saturating_add(1)..)
            .map_or(0, count_leading_digits),
        _ => 0,
    };

    let end = if fraction_len == 0 {
        integer_len
    } else {
        integer_len.saturating_add(1).saturating_add(fraction_len)
    };
    trimmed.get(..end)
}

/// Returns `true` when `value`, once trimmed, begins with a number.
///
/// Arbitrary currency text may follow the number.
///
/// # Examples
///
/// ```
/// use tallybook::record::domain::starts_with_number;
///
/// assert!(starts_with_number("500 USD"));
/// assert!(starts_with_number("12,5 EUR"));
/// assert!(!starts_with_number("USD 500"));
/// assert!(!starts_with_number(""));
/// ```
#[must_use]
pub fn starts_with_number(value: &str) -> bool {
    leading_amount(value).is_some()
}

fn count_leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
