//! Individual validation rule implementations.
//!
//! Each rule is a pure function over a schema and the message body. Rules
//! return `Ok(())` on success or the first [`ValidationFailure`] they find,
//! and are applied by [`SchemaRecordValidator`] in the order listed here.
//!
//! [`SchemaRecordValidator`]: super::service::SchemaRecordValidator

use crate::record::{
    domain::{RecordSchema, starts_with_number},
    error::ValidationFailure,
    ports::validator::ValidationResult,
};

/// Splits raw message text into trimmed body lines, dropping the command line.
///
/// `\r\n` and every character accepted by [`is_line_break`] end a line; a
/// trailing line break does not add an empty line.
///
/// # Errors
///
/// Returns [`ValidationFailure::EmptyMessage`] when the text has no lines.
pub fn split_body(raw_text: &str) -> ValidationResult<Vec<String>> {
    let normalized = raw_text.replace("\r\n", "\n");
    let mut lines: Vec<&str> = normalized.split(is_line_break).collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }

    let mut remaining = lines.into_iter();
    if remaining.next().is_none() {
        return Err(ValidationFailure::EmptyMessage);
    }
    Ok(remaining.map(|line| line.trim().to_owned()).collect())
}

/// Returns `true` for characters that end a line of message text.
///
/// Besides `\n` and `\r` this covers the vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators some mobile clients send.
#[must_use]
pub const fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'..='\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Checks the body fits the schema with at most one optional trailing line.
///
/// # Errors
///
/// Returns [`ValidationFailure::TooFewLines`] or
/// [`ValidationFailure::TooManyLines`].
pub fn check_line_count(schema: &RecordSchema, body_len: usize) -> ValidationResult<()> {
    if body_len < schema.min_lines() {
        return Err(ValidationFailure::TooFewLines {
            min: schema.min_lines(),
            max: schema.max_lines(),
            actual: body_len,
        });
    }
    if body_len > schema.max_lines() {
        return Err(ValidationFailure::TooManyLines {
            max: schema.max_lines(),
            actual: body_len,
        });
    }
    Ok(())
}

/// Pads an omitted trailing field with an empty string.
///
/// Must run after [`check_line_count`], so at most one field is ever padded.
pub fn pad_optional_field(schema: &RecordSchema, body: &mut Vec<String>) {
    if body.len() == schema.min_lines() {
        body.push(String::new());
    }
}

/// Checks every mandatory field is non-empty, in field order.
///
/// # Errors
///
/// Returns [`ValidationFailure::RequiredFieldEmpty`] for the first blank one.
pub fn check_required_fields(schema: &RecordSchema, body: &[String]) -> ValidationResult<()> {
    for index in schema.required_indices() {
        if body.get(index).is_none_or(String::is_empty) {
            return Err(ValidationFailure::RequiredFieldEmpty {
                line: index.saturating_add(1),
            });
        }
    }
    Ok(())
}

/// Applies per-field content checks to non-empty fields, in field order.
///
/// # Errors
///
/// Returns the failure associated with the first rejecting check.
pub fn check_field_contents(schema: &RecordSchema, body: &[String]) -> ValidationResult<()> {
    for (index, check) in schema.checked_fields() {
        let Some(value) = body.get(index) else {
            continue;
        };
        if !value.is_empty() && !check.accepts(value) {
            return Err(check.failure(index));
        }
    }
    Ok(())
}

/// Applies the schema's amount-group rule, if it has one.
///
/// At least one group member must be non-empty and start with a number.
/// Every non-empty member that does not start with a number is reported,
/// even when another member holds a valid amount.
///
/// # Errors
///
/// Returns [`ValidationFailure::NoAmountProvided`] when no member holds an
/// amount, otherwise [`ValidationFailure::InvalidAmount`] for the first
/// malformed member.
pub fn check_amount_group(schema: &RecordSchema, body: &[String]) -> ValidationResult<()> {
    let Some(group) = schema.amount_group() else {
        return Ok(());
    };

    let members: Vec<(usize, &str)> = group
        .indices()
        .iter()
        .map(|&index| (index, body.get(index).map_or("", String::as_str)))
        .collect();

    let has_amount = members
        .iter()
        .any(|(_, value)| !value.is_empty() && starts_with_number(value));
    if !has_amount {
        let (first_line, last_line) = group.line_span().unwrap_or_default();
        return Err(ValidationFailure::NoAmountProvided {
            first_line,
            last_line,
        });
    }

    if let Some((index, _)) = members
        .iter()
        .find(|(_, value)| !value.is_empty() && !starts_with_number(value))
    {
        return Err(ValidationFailure::InvalidAmount {
            line: index.saturating_add(1),
        });
    }

    Ok(())
}
