//! Schema-driven validator implementation.
//!
//! One validator type serves every record kind; the schema value carries
//! everything that differs between them.

use crate::record::{
    domain::{RecordSchema, ValidatedRecord},
    error::SchemaError,
    ports::validator::{RecordValidator, ValidationResult},
    validation::rules,
};

/// Generic line-record validator.
///
/// # Examples
///
/// ```
/// use tallybook::record::domain::RecordSchema;
/// use tallybook::record::ports::validator::RecordValidator;
/// use tallybook::record::validation::SchemaRecordValidator;
///
/// let validator = SchemaRecordValidator::new(RecordSchema::expense())
///     .expect("built-in schema is consistent");
/// let record = validator
///     .validate("/expense\n24.12.2024\n319 USD\n\n\nSalary\nKate")
///     .expect("message is valid");
///
/// assert_eq!(
///     record.fields(),
///     ["24.12.2024", "319 USD", "", "", "Salary", "Kate", ""]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SchemaRecordValidator {
    schema: RecordSchema,
}

impl SchemaRecordValidator {
    /// Creates a validator after checking the schema is consistent.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the schema is malformed.
    pub fn new(schema: RecordSchema) -> Result<Self, SchemaError> {
        schema.check()?;
        Ok(Self { schema })
    }

    /// Creates the `/income` validator.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the built-in income schema is malformed.
    pub fn income() -> Result<Self, SchemaError> {
        Self::new(RecordSchema::income())
    }

    /// Creates the `/expense` validator.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the built-in expense schema is malformed.
    pub fn expense() -> Result<Self, SchemaError> {
        Self::new(RecordSchema::expense())
    }
}

impl RecordValidator for SchemaRecordValidator {
    fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    fn validate(&self, raw_text: &str) -> ValidationResult<ValidatedRecord> {
        let mut body = rules::split_body(raw_text)?;
        rules::check_line_count(&self.schema, body.len())?;
        rules::pad_optional_field(&self.schema, &mut body);
        rules::check_required_fields(&self.schema, &body)?;
        rules::check_field_contents(&self.schema, &body)?;
        rules::check_amount_group(&self.schema, &body)?;
        Ok(ValidatedRecord::new(self.schema.kind(), body))
    }
}

// Note: end-to-end validator tests live in src/record/tests/validation_tests.rs.
