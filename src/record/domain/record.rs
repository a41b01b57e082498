//! Validated record value.

use super::schema::RecordKind;

/// A record that passed validation, ready to be appended as one table row.
///
/// The field list always has the full width of the schema that produced it.
/// An omitted optional trailing field is represented by an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    kind: RecordKind,
    fields: Vec<String>,
}

impl ValidatedRecord {
    pub(crate) const fn new(kind: RecordKind, fields: Vec<String>) -> Self {
        Self { kind, fields }
    }

    /// Returns the record type.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Returns the cell values in column order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of cells in the row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Returns the trailing comment, empty when it was omitted.
    #[must_use]
    pub fn comment(&self) -> &str {
        self.fields.last().map_or("", String::as_str)
    }

    /// Consumes the record and returns the cell values.
    #[must_use]
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}
