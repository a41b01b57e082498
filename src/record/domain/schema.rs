//! Declarative record schemas.
//!
//! A schema lists the fields of one record type in message order. The last
//! field is always the optional comment, so a message body may carry either
//! `width - 1` or `width` lines.

use std::fmt;

use super::primitives::{is_date_shape, starts_with_number};
use crate::record::error::{SchemaError, ValidationFailure};

/// The two record types accepted by the intake service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A client payment.
    Income,
    /// A company expense.
    Expense,
}

impl RecordKind {
    /// Returns the chat command keyword without the leading slash.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Content check attached to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    /// `DD.MM.YY` or `DD.MM.YYYY` prefix.
    DateShape,
    /// Leading number followed by optional currency text.
    LeadingAmount,
}

impl FieldCheck {
    /// Returns `true` when `value` passes this check.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::DateShape => is_date_shape(value),
            Self::LeadingAmount => starts_with_number(value),
        }
    }

    /// Builds the failure reported when the field at zero-based `index`
    /// fails this check.
    #[must_use]
    pub const fn failure(self, index: usize) -> ValidationFailure {
        let line = index.saturating_add(1);
        match self {
            Self::DateShape => ValidationFailure::InvalidDate { line },
            Self::LeadingAmount => ValidationFailure::InvalidAmount { line },
        }
    }
}

/// One line of a record template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Human-readable name shown in templates and error messages.
    pub label: String,
    /// Whether the line must be non-empty.
    pub required: bool,
    /// Optional content check applied to non-empty values.
    pub check: Option<FieldCheck>,
}

impl FieldSpec {
    /// Creates a mandatory field.
    #[must_use]
    pub fn required(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            required: true,
            check: None,
        }
    }

    /// Creates a field that may be left blank.
    #[must_use]
    pub fn optional(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            required: false,
            check: None,
        }
    }

    /// Attaches a content check.
    #[must_use]
    pub fn with_check(mut self, check: FieldCheck) -> Self {
        self.check = Some(check);
        self
    }
}

/// Cross-field rule over a group of individually optional amount fields.
///
/// At least one field in the group must hold an amount, and every non-empty
/// field in the group must start with a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountGroup {
    indices: Vec<usize>,
}

impl AmountGroup {
    /// Creates a group over zero-based field indices.
    #[must_use]
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut collected: Vec<usize> = indices.into_iter().collect();
        collected.sort_unstable();
        collected.dedup();
        Self {
            indices: collected,
        }
    }

    /// Returns the zero-based field indices in ascending order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the 1-based line numbers of the first and last member.
    #[must_use]
    pub fn line_span(&self) -> Option<(usize, usize)> {
        let first = self.indices.first()?;
        let last = self.indices.last()?;
        Some((first.saturating_add(1), last.saturating_add(1)))
    }
}

/// Description of one record type.
///
/// # Examples
///
/// ```
/// use tallybook::record::domain::{RecordKind, RecordSchema};
///
/// let schema = RecordSchema::expense();
/// assert_eq!(schema.kind(), RecordKind::Expense);
/// assert_eq!(schema.width(), 7);
/// assert_eq!(schema.min_lines(), 6);
/// assert_eq!(schema.required_indices().collect::<Vec<_>>(), vec![0, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    kind: RecordKind,
    fields: Vec<FieldSpec>,
    amount_group: Option<AmountGroup>,
    amount_examples: Vec<String>,
}

impl RecordSchema {
    /// Creates an empty schema for `kind`.
    #[must_use]
    pub const fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
            amount_group: None,
            amount_examples: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Sets the amount-group rule.
    #[must_use]
    pub fn with_amount_group(mut self, group: AmountGroup) -> Self {
        self.amount_group = Some(group);
        self
    }

    /// Sets the amount examples quoted in error messages.
    #[must_use]
    pub fn with_amount_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amount_examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// Schema for `/income` messages: ten required lines and a comment.
    #[must_use]
    pub fn income() -> Self {
        Self::new(RecordKind::Income)
            .with_field(FieldSpec::required("Payment date").with_check(FieldCheck::DateShape))
            .with_field(
                FieldSpec::required("Amount with currency").with_check(FieldCheck::LeadingAmount),
            )
            .with_field(FieldSpec::required("Payment purpose"))
            .with_field(FieldSpec::required("Client full name"))
            .with_field(FieldSpec::required("Client date of birth"))
            .with_field(FieldSpec::required("Phone number"))
            .with_field(FieldSpec::required("Email"))
            .with_field(FieldSpec::required("Client status"))
            .with_field(FieldSpec::required("Country"))
            .with_field(FieldSpec::required("Manager"))
            .with_field(FieldSpec::optional("Comment"))
            .with_amount_examples(["500 USD", "500 EUR", "500.00 USD"])
    }

    /// Schema for `/expense` messages.
    ///
    /// The three amount lines are individually optional but at least one of
    /// them must carry an amount.
    #[must_use]
    pub fn expense() -> Self {
        Self::new(RecordKind::Expense)
            .with_field(FieldSpec::required("Date").with_check(FieldCheck::DateShape))
            .with_field(FieldSpec::optional("Amount in USD"))
            .with_field(FieldSpec::optional("Amount in EUR"))
            .with_field(FieldSpec::optional("Amount in other currency"))
            .with_field(FieldSpec::required("Expense name"))
            .with_field(FieldSpec::required("Manager"))
            .with_field(FieldSpec::optional("Comment"))
            .with_amount_group(AmountGroup::new([1, 2, 3]))
            .with_amount_examples(["319 USD", "276 EUR", "120000 KZT"])
    }

    /// Returns the schema for `kind`.
    #[must_use]
    pub fn for_kind(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Income => Self::income(),
            RecordKind::Expense => Self::expense(),
        }
    }

    /// Returns the record type this schema describes.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Returns the fields in message order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the field at zero-based `index`.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&FieldSpec> {
        self.fields.get(index)
    }

    /// Number of fields in a validated record.
    #[must_use]
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Fewest body lines accepted: every field except the trailing comment.
    #[must_use]
    pub fn min_lines(&self) -> usize {
        self.width().saturating_sub(1)
    }

    /// Most body lines accepted.
    #[must_use]
    pub fn max_lines(&self) -> usize {
        self.width()
    }

    /// Zero-based indices of mandatory fields, ascending.
    pub fn required_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.required)
            .map(|(index, _)| index)
    }

    /// Zero-based indices paired with their content check, ascending.
    pub fn checked_fields(&self) -> impl Iterator<Item = (usize, FieldCheck)> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter_map(|(index, field)| field.check.map(|check| (index, check)))
    }

    /// Returns the amount-group rule, if any.
    #[must_use]
    pub const fn amount_group(&self) -> Option<&AmountGroup> {
        self.amount_group.as_ref()
    }

    /// Returns the amount examples quoted in error messages.
    #[must_use]
    pub fn amount_examples(&self) -> &[String] {
        &self.amount_examples
    }

    /// Verifies the schema is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the schema has no fields, its trailing
    /// field is required, or its amount group is empty, out of range or
    /// overlaps a required field.
    pub fn check(&self) -> Result<(), SchemaError> {
        let trailing = self.fields.last().ok_or(SchemaError::NoFields(self.kind))?;
        if trailing.required {
            return Err(SchemaError::RequiredTrailingField(self.kind));
        }

        if let Some(group) = self.amount_group.as_ref() {
            if group.indices().is_empty() {
                return Err(SchemaError::EmptyAmountGroup(self.kind));
            }
            for &index in group.indices() {
                let field = self.field(index).ok_or(SchemaError::AmountIndexOutOfRange {
                    kind: self.kind,
                    index,
                    width: self.width(),
                })?;
                if field.required {
                    return Err(SchemaError::RequiredAmountField {
                        kind: self.kind,
                        index,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn income_schema_requires_everything_but_the_comment() {
        let schema = RecordSchema::income();

        assert_eq!(schema.width(), 11);
        assert_eq!(schema.min_lines(), 10);
        assert_eq!(schema.max_lines(), 11);
        assert_eq!(
            schema.required_indices().collect::<Vec<_>>(),
            (0..10).collect::<Vec<_>>()
        );
        assert_eq!(
            schema.checked_fields().collect::<Vec<_>>(),
            vec![(0, FieldCheck::DateShape), (1, FieldCheck::LeadingAmount)]
        );
        assert!(schema.amount_group().is_none());
    }

    #[rstest]
    fn expense_schema_groups_the_amount_lines() {
        let schema = RecordSchema::expense();

        assert_eq!(schema.width(), 7);
        assert_eq!(
            schema.amount_group().map(AmountGroup::indices),
            Some([1, 2, 3].as_slice())
        );
        assert_eq!(
            schema.amount_group().and_then(AmountGroup::line_span),
            Some((2, 4))
        );
    }

    #[rstest]
    #[case(RecordSchema::income())]
    #[case(RecordSchema::expense())]
    fn built_in_schemas_are_consistent(#[case] schema: RecordSchema) {
        assert_eq!(schema.check(), Ok(()));
    }

    #[rstest]
    fn check_rejects_schema_without_fields() {
        let schema = RecordSchema::new(RecordKind::Income);

        assert_eq!(schema.check(), Err(SchemaError::NoFields(RecordKind::Income)));
    }

    #[rstest]
    fn check_rejects_required_trailing_field() {
        let schema =
            RecordSchema::new(RecordKind::Income).with_field(FieldSpec::required("Payment date"));

        assert_eq!(
            schema.check(),
            Err(SchemaError::RequiredTrailingField(RecordKind::Income))
        );
    }

    #[rstest]
    fn check_rejects_amount_group_outside_the_schema() {
        let schema = RecordSchema::new(RecordKind::Expense)
            .with_field(FieldSpec::optional("Amount"))
            .with_amount_group(AmountGroup::new([0, 4]));

        assert_eq!(
            schema.check(),
            Err(SchemaError::AmountIndexOutOfRange {
                kind: RecordKind::Expense,
                index: 4,
                width: 1,
            })
        );
    }

    #[rstest]
    fn check_rejects_required_amount_field() {
        let schema = RecordSchema::new(RecordKind::Expense)
            .with_field(FieldSpec::required("Amount"))
            .with_field(FieldSpec::optional("Comment"))
            .with_amount_group(AmountGroup::new([0]));

        assert_eq!(
            schema.check(),
            Err(SchemaError::RequiredAmountField {
                kind: RecordKind::Expense,
                index: 0,
            })
        );
    }

    #[rstest]
    fn check_rejects_empty_amount_group() {
        let schema = RecordSchema::new(RecordKind::Expense)
            .with_field(FieldSpec::optional("Comment"))
            .with_amount_group(AmountGroup::new(Vec::<usize>::new()));

        assert_eq!(
            schema.check(),
            Err(SchemaError::EmptyAmountGroup(RecordKind::Expense))
        );
    }
}
