//! Record intake: parsing chat messages into income and expense rows.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types ([`domain::RecordSchema`], [`domain::ValidatedRecord`],
//!   [`domain::ChatCommand`]) and the primitive shape checks
//! - **Ports**: Abstract trait interfaces ([`ports::validator::RecordValidator`],
//!   [`ports::table::TableStore`])
//! - **Adapters**: Concrete table stores ([`adapters::memory::InMemoryTableStore`],
//!   [`adapters::directory::DirectoryTableStore`])
//! - **Validation**: One schema-driven validator shared by every record kind
//! - **Services**: Per-message handling ([`services::RecordIntakeService`])
//!
//! # Example
//!
//! ```
//! use tallybook::record::domain::RecordSchema;
//! use tallybook::record::error::ValidationFailure;
//! use tallybook::record::ports::validator::RecordValidator;
//! use tallybook::record::validation::SchemaRecordValidator;
//!
//! let validator = SchemaRecordValidator::new(RecordSchema::income())
//!     .expect("built-in schema is consistent");
//!
//! let failure = validator
//!     .validate("/income\n24.12.2024\n500 USD")
//!     .expect_err("two lines are not enough");
//! assert!(matches!(failure, ValidationFailure::TooFewLines { .. }));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
