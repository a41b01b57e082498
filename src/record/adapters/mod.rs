//! Storage adapters for the record module.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTableStore`]: thread-safe in-memory rows for tests
//! - [`directory::DirectoryTableStore`]: JSON-lines files in a data directory

pub mod directory;
pub mod memory;

pub use directory::DirectoryTableStore;
pub use memory::InMemoryTableStore;
