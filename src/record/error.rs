//! Error types for record validation and storage.
//!
//! [`ValidationFailure`] is the user-input taxonomy: every variant maps to
//! exactly one message the sender can act on. [`SchemaError`] is a
//! programming error in a schema definition and [`TableStoreError`] is an
//! opaque failure of the append collaborator; neither is shown to users
//! verbatim.

use std::sync::Arc;

use thiserror::Error;

use super::domain::{RecordKind, RecordSchema};

/// Broad class of a [`ValidationFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// The message shape cannot match the schema.
    Structural,
    /// A mandatory line was blank.
    RequiredField,
    /// A line was present but malformed.
    Content,
}

/// Reasons a message body is rejected.
///
/// Line numbers are 1-based positions in the message body, not counting the
/// command line. The `Display` output is meant for logs; use
/// [`ValidationFailure::user_message`] for replies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// The message has no lines at all.
    #[error("message is empty")]
    EmptyMessage,

    /// The body has fewer lines than the schema's required fields.
    #[error("message body has {actual} lines, expected {min} to {max}")]
    TooFewLines {
        /// Fewest accepted body lines.
        min: usize,
        /// Most accepted body lines.
        max: usize,
        /// Body lines received.
        actual: usize,
    },

    /// The body has more than one line beyond the required fields.
    #[error("message body has {actual} lines, expected at most {max}")]
    TooManyLines {
        /// Most accepted body lines.
        max: usize,
        /// Body lines received.
        actual: usize,
    },

    /// A mandatory line is blank after trimming.
    #[error("required line {line} is empty")]
    RequiredFieldEmpty {
        /// Offending line.
        line: usize,
    },

    /// A date line does not have the `DD.MM.YY` or `DD.MM.YYYY` shape.
    #[error("line {line} is not shaped like a date")]
    InvalidDate {
        /// Offending line.
        line: usize,
    },

    /// An amount line does not start with a number.
    #[error("line {line} does not start with an amount")]
    InvalidAmount {
        /// Offending line.
        line: usize,
    },

    /// None of the amount lines carries an amount.
    #[error("no amount on lines {first_line} to {last_line}")]
    NoAmountProvided {
        /// First line of the amount group.
        first_line: usize,
        /// Last line of the amount group.
        last_line: usize,
    },
}

impl ValidationFailure {
    /// Returns the broad class of this failure.
    #[must_use]
    pub const fn category(&self) -> FailureCategory {
        match self {
            Self::EmptyMessage | Self::TooFewLines { .. } | Self::TooManyLines { .. } => {
                FailureCategory::Structural
            }
            Self::RequiredFieldEmpty { .. } => FailureCategory::RequiredField,
            Self::InvalidDate { .. } | Self::InvalidAmount { .. } | Self::NoAmountProvided { .. } => {
                FailureCategory::Content
            }
        }
    }

    /// Returns the offending 1-based line, when a single line is at fault.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::RequiredFieldEmpty { line }
            | Self::InvalidDate { line }
            | Self::InvalidAmount { line } => Some(*line),
            Self::EmptyMessage
            | Self::TooFewLines { .. }
            | Self::TooManyLines { .. }
            | Self::NoAmountProvided { .. } => None,
        }
    }

    /// Renders the single-line reply shown to the sender.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallybook::record::domain::RecordSchema;
    /// use tallybook::record::error::ValidationFailure;
    ///
    /// let failure = ValidationFailure::RequiredFieldEmpty { line: 7 };
    /// assert_eq!(
    ///     failure.user_message(&RecordSchema::income()),
    ///     "Error: line 7 is required but empty. \
    ///      Please check the /income template and send the message again.",
    /// );
    /// ```
    #[must_use]
    pub fn user_message(&self, schema: &RecordSchema) -> String {
        let command = schema.kind().command();
        match self {
            Self::EmptyMessage => format!(
                "Error: the message is empty. Please send /{command} followed by the template."
            ),
            Self::TooFewLines { min, max, .. } => format!(
                "Error: not enough lines for /{command}. \
                 Expected {min}\u{2013}{max} lines after the command."
            ),
            Self::TooManyLines { .. } => format!(
                "Error: only one {command} record is allowed per message. \
                 Remove extra lines and send a new message."
            ),
            Self::RequiredFieldEmpty { line } => format!(
                "Error: line {line} is required but empty. \
                 Please check the /{command} template and send the message again."
            ),
            Self::InvalidDate { line } => {
                let label = field_label(schema, *line).unwrap_or_else(|| "date".to_owned());
                format!("Error in line {line}: {label} must be in format DD.MM.YY or DD.MM.YYYY.")
            }
            Self::InvalidAmount { line } => format!(
                "Error in line {line}: unable to parse amount. Examples: {}.",
                schema.amount_examples().join(", ")
            ),
            Self::NoAmountProvided {
                first_line,
                last_line,
            } => format!(
                "Error: no {command} amount specified. \
                 Please fill at least one of lines {first_line}\u{2013}{last_line}."
            ),
        }
    }
}

fn field_label(schema: &RecordSchema, line: usize) -> Option<String> {
    let index = line.checked_sub(1)?;
    schema
        .field(index)
        .map(|field| field.label.to_lowercase())
}

/// A schema definition is internally inconsistent.
///
/// This is a defect in the program, never in user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The schema declares no fields.
    #[error("{0} schema declares no fields")]
    NoFields(RecordKind),

    /// The trailing field must be optional so it can be padded.
    #[error("{0} schema must end with an optional field")]
    RequiredTrailingField(RecordKind),

    /// The amount group lists no fields.
    #[error("{0} schema has an empty amount group")]
    EmptyAmountGroup(RecordKind),

    /// An amount-group index is past the last field.
    #[error("{kind} schema amount group references field {index} but has width {width}")]
    AmountIndexOutOfRange {
        /// Record type.
        kind: RecordKind,
        /// Offending zero-based index.
        index: usize,
        /// Schema width.
        width: usize,
    },

    /// An amount-group member is also marked required.
    #[error("{kind} schema amount field {index} must be optional")]
    RequiredAmountField {
        /// Record type.
        kind: RecordKind,
        /// Offending zero-based index.
        index: usize,
    },
}

/// Failures of the append collaborator.
#[derive(Debug, Clone, Error)]
pub enum TableStoreError {
    /// The table name cannot be used by this store.
    #[error("invalid table name '{0}'")]
    InvalidTableName(String),

    /// The store cannot be reached or its state is unusable.
    #[error("table store unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing storage failed.
    #[error("table store I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// The row could not be encoded for storage.
    #[error("table store serialization error: {0}")]
    Serialization(String),
}

impl TableStoreError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<std::io::Error> for TableStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
