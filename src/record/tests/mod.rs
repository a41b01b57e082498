//! Unit tests for the record module.
//!
//! Tests are organised by concern: end-to-end validation of both schemas and
//! the intake service's handling of every outcome.
