//! Port trait definitions for the record subsystem.
//!
//! Ports define the abstract interfaces that intake needs from validation
//! and storage. Adapters implement them.

pub mod table;
pub mod validator;

pub use table::{TableStore, TableStoreResult};
pub use validator::{RecordValidator, ValidationResult};
