//! Record validation implementation.
//!
//! Individual rules live in [`rules`]; [`SchemaRecordValidator`] applies
//! them in order for any schema.

pub mod rules;
pub mod service;

pub use service::SchemaRecordValidator;
