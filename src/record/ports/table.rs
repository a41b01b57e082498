//! Append collaborator port.
//!
//! The intake service forwards each validated record to a [`TableStore`]
//! exactly once. Stores decide how rows are persisted; the service treats
//! every failure as opaque.

use async_trait::async_trait;

use crate::record::error::TableStoreError;

/// Result type for table store operations.
pub type TableStoreResult<T> = Result<T, TableStoreError>;

/// Port for appending rows of string cells to named tables.
///
/// # Implementation Notes
///
/// Implementations must:
/// - Append rows without deduplicating them
/// - Keep rows of one table in the order their appends completed
/// - Be safe to share across tasks
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Appends one row to `table`.
    ///
    /// # Errors
    ///
    /// Returns [`TableStoreError`] when the row cannot be stored.
    async fn append_row(&self, table: &str, fields: &[String]) -> TableStoreResult<()>;

    /// Returns a link users can follow to view the tables.
    ///
    /// # Errors
    ///
    /// Returns [`TableStoreError`] when the store has no shareable location.
    async fn location(&self) -> TableStoreResult<String>;
}
