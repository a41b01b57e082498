//! Validator port for record messages.

use crate::record::{
    domain::{RecordSchema, ValidatedRecord},
    error::ValidationFailure,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationFailure>;

/// Port for turning raw chat text into a validated record.
///
/// # Implementation Notes
///
/// Implementations must:
/// - Stop at the first failure; a record is never partially returned
/// - Hold no state between calls, so the same text always yields the same
///   outcome
/// - Be thread-safe
pub trait RecordValidator: Send + Sync {
    /// Returns the schema this validator applies.
    fn schema(&self) -> &RecordSchema;

    /// Validates the full message text, command line included.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure`] describing the first rule the text
    /// breaks.
    fn validate(&self, raw_text: &str) -> ValidationResult<ValidatedRecord>;
}
