//! Pure domain types for record intake.
//!
//! Nothing in this module performs I/O.

mod command;
mod primitives;
mod record;
mod schema;

pub use command::ChatCommand;
pub use primitives::{is_date_shape, leading_amount, starts_with_number};
pub use record::ValidatedRecord;
pub use schema::{AmountGroup, FieldCheck, FieldSpec, RecordKind, RecordSchema};
