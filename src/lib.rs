//! Tallybook: chat-driven income and expense bookkeeping.
//!
//! This crate turns structured multi-line chat messages into validated rows
//! appended to an income or an expense table. The transport that delivers
//! messages and the spreadsheet that ultimately stores rows sit behind
//! narrow interfaces: raw message text in, one `append_row` call out.
//!
//! # Architecture
//!
//! Tallybook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record schemas and shape checks with no I/O
//! - **Ports**: Abstract trait interfaces for validation and storage
//! - **Adapters**: Concrete table stores (in-memory, data directory)
//!
//! # Modules
//!
//! - [`record`]: Record schemas, validation and message intake
//! - [`config`]: Environment-driven settings
//! - [`telemetry`]: Logging setup

pub mod config;
pub mod record;
pub mod telemetry;
