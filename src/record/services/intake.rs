//! Per-message intake service.
//!
//! The service owns everything a message handler needs, injected once at
//! construction: the two record validators, the table store and the table
//! names. It reads no global state and keeps none between messages.

use std::sync::Arc;

use thiserror::Error;

use super::replies::{self, ReplyRenderError};
use crate::record::{
    domain::{ChatCommand, RecordKind},
    error::{SchemaError, ValidationFailure},
    ports::{table::TableStore, validator::RecordValidator},
    validation::SchemaRecordValidator,
};

/// Reply sent after a record is appended.
pub const DONE_REPLY: &str = "Done";

/// Reply sent when the table store rejects an append.
pub const STORAGE_FAILURE_REPLY: &str = "Error: failed to write data to the spreadsheet. \
     Please try again later or contact the administrator.";

/// Reply sent when the table store cannot produce a link.
pub const LOCATION_FAILURE_REPLY: &str =
    "Error: unable to access the spreadsheet. Please contact the administrator.";

/// Reply sent for slash commands the bot does not know.
pub const UNKNOWN_COMMAND_REPLY: &str =
    "Unknown command. Send /help to see the available commands and message formats.";

/// Reply sent for text that is not a command.
pub const NOT_A_COMMAND_REPLY: &str =
    "Please start your message with a command such as /income or /expense. Send /help for details.";

/// Destination table for each record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    /// Table receiving `/income` rows.
    pub income: String,
    /// Table receiving `/expense` rows.
    pub expense: String,
}

impl TableNames {
    /// Creates a table-name mapping.
    #[must_use]
    pub fn new(income: impl Into<String>, expense: impl Into<String>) -> Self {
        Self {
            income: income.into(),
            expense: expense.into(),
        }
    }

    /// Returns the table receiving rows of `kind`.
    #[must_use]
    pub fn for_kind(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Income => &self.income,
            RecordKind::Expense => &self.expense,
        }
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self::new("Income", "Expenses")
    }
}

/// What happened to one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// A validated record was appended to `table`.
    Recorded {
        /// Record type.
        kind: RecordKind,
        /// Destination table.
        table: String,
    },
    /// The message failed validation; nothing was stored.
    Rejected {
        /// Record type.
        kind: RecordKind,
        /// First rule the message broke.
        failure: ValidationFailure,
    },
    /// The record was valid but the table store failed.
    StorageFailed {
        /// Record type.
        kind: RecordKind,
    },
    /// A help, greeting, link or hint reply; nothing was stored.
    Informational,
}

/// Reply to one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeReply {
    /// Outcome tag for callers that branch on the result.
    pub outcome: IntakeOutcome,
    /// Text to send back to the user.
    pub text: String,
}

impl IntakeReply {
    fn informational(text: impl Into<String>) -> Self {
        Self {
            outcome: IntakeOutcome::Informational,
            text: text.into(),
        }
    }
}

/// Errors raised while wiring the intake service.
///
/// These are programming errors and should abort startup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeSetupError {
    /// A built-in schema is inconsistent.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A validator was supplied for the wrong record kind.
    #[error("validator for {expected} records applies the {actual} schema")]
    MismatchedValidator {
        /// Kind the slot expects.
        expected: RecordKind,
        /// Kind the validator's schema describes.
        actual: RecordKind,
    },

    /// An informational reply failed to render.
    #[error(transparent)]
    Reply(#[from] ReplyRenderError),
}

/// Service that turns chat messages into appended table rows.
pub struct RecordIntakeService<S, V = SchemaRecordValidator>
where
    S: TableStore,
    V: RecordValidator,
{
    store: Arc<S>,
    income: V,
    expense: V,
    tables: TableNames,
    start_text: String,
    help_text: String,
}

impl<S> RecordIntakeService<S>
where
    S: TableStore,
{
    /// Creates a service using the built-in income and expense schemas.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeSetupError`] if a built-in schema is inconsistent or
    /// an informational reply fails to render.
    pub fn with_default_validators(
        store: Arc<S>,
        tables: TableNames,
    ) -> Result<Self, IntakeSetupError> {
        Self::new(
            store,
            SchemaRecordValidator::income()?,
            SchemaRecordValidator::expense()?,
            tables,
        )
    }
}

impl<S, V> RecordIntakeService<S, V>
where
    S: TableStore,
    V: RecordValidator,
{
    /// Creates a service from explicitly supplied validators.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeSetupError::MismatchedValidator`] if a validator's
    /// schema describes the other record kind, or
    /// [`IntakeSetupError::Reply`] if an informational reply fails to render.
    pub fn new(
        store: Arc<S>,
        income: V,
        expense: V,
        tables: TableNames,
    ) -> Result<Self, IntakeSetupError> {
        ensure_kind(&income, RecordKind::Income)?;
        ensure_kind(&expense, RecordKind::Expense)?;

        let schemas = [income.schema(), expense.schema()];
        let start_text = replies::render_start(&schemas)?;
        let help_text = replies::render_help(&schemas)?;

        Ok(Self {
            store,
            income,
            expense,
            tables,
            start_text,
            help_text,
        })
    }

    /// Returns the validator for `kind`.
    #[must_use]
    pub const fn validator(&self, kind: RecordKind) -> &V {
        match kind {
            RecordKind::Income => &self.income,
            RecordKind::Expense => &self.expense,
        }
    }

    /// Returns the destination table names.
    #[must_use]
    pub const fn tables(&self) -> &TableNames {
        &self.tables
    }

    /// Handles the full text of one chat message and returns the reply.
    ///
    /// A record message is validated first; the table store is called
    /// exactly once, and only for a valid record. Failures never escape as
    /// errors: each one becomes a reply the user can act on.
    pub async fn handle(&self, text: &str) -> IntakeReply {
        match ChatCommand::parse(text) {
            ChatCommand::Start => IntakeReply::informational(self.start_text.clone()),
            ChatCommand::Help => IntakeReply::informational(self.help_text.clone()),
            ChatCommand::Record(kind) => self.record(kind, text).await,
            ChatCommand::Excel => self.share_location().await,
            ChatCommand::Unknown(name) => {
                tracing::warn!(command = %name, "unknown chat command");
                IntakeReply::informational(UNKNOWN_COMMAND_REPLY)
            }
            ChatCommand::NotACommand => IntakeReply::informational(NOT_A_COMMAND_REPLY),
        }
    }

    async fn record(&self, kind: RecordKind, text: &str) -> IntakeReply {
        let validator = self.validator(kind);
        let record = match validator.validate(text) {
            Ok(record) => record,
            Err(failure) => {
                tracing::debug!(
                    %kind,
                    category = ?failure.category(),
                    line = ?failure.line(),
                    %failure,
                    "rejected record message"
                );
                let reply_text = failure.user_message(validator.schema());
                return IntakeReply {
                    outcome: IntakeOutcome::Rejected { kind, failure },
                    text: reply_text,
                };
            }
        };

        let table = self.tables.for_kind(kind);
        match self.store.append_row(table, record.fields()).await {
            Ok(()) => {
                tracing::info!(%kind, table, width = record.width(), "record appended");
                IntakeReply {
                    outcome: IntakeOutcome::Recorded {
                        kind,
                        table: table.to_owned(),
                    },
                    text: DONE_REPLY.to_owned(),
                }
            }
            Err(error) => {
                tracing::error!(%kind, table, %error, "failed to append record");
                IntakeReply {
                    outcome: IntakeOutcome::StorageFailed { kind },
                    text: STORAGE_FAILURE_REPLY.to_owned(),
                }
            }
        }
    }

    async fn share_location(&self) -> IntakeReply {
        match self.store.location().await {
            Ok(location) => IntakeReply::informational(format!(
                "Here is the link to the accounting spreadsheet:\n{location}"
            )),
            Err(error) => {
                tracing::error!(%error, "failed to resolve table store location");
                IntakeReply::informational(LOCATION_FAILURE_REPLY)
            }
        }
    }
}

fn ensure_kind<V: RecordValidator>(validator: &V, expected: RecordKind) -> Result<(), IntakeSetupError> {
    let actual = validator.schema().kind();
    if actual == expected {
        Ok(())
    } else {
        Err(IntakeSetupError::MismatchedValidator { expected, actual })
    }
}
