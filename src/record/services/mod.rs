//! Application services for the record subsystem.
//!
//! Services coordinate validation and storage for one inbound message at a
//! time.

mod intake;
pub mod replies;

pub use intake::{
    DONE_REPLY, IntakeOutcome, IntakeReply, IntakeSetupError, LOCATION_FAILURE_REPLY,
    NOT_A_COMMAND_REPLY, RecordIntakeService, STORAGE_FAILURE_REPLY, TableNames,
    UNKNOWN_COMMAND_REPLY,
};
pub use replies::ReplyRenderError;
