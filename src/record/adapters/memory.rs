//! In-memory implementation of the [`TableStore`] port.
//!
//! Thread-safe and free of I/O. Suitable for tests and dry runs only.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::record::{
    error::TableStoreError,
    ports::table::{TableStore, TableStoreResult},
};

/// In-memory implementation of [`TableStore`].
///
/// # Example
///
/// ```
/// use tallybook::record::adapters::memory::InMemoryTableStore;
///
/// let store = InMemoryTableStore::new();
/// assert!(store.rows("Income").is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryTableStore {
    tables: Arc<RwLock<HashMap<String, Vec<Vec<String>>>>>,
    location: Option<String>,
}

impl InMemoryTableStore {
    /// Creates an empty store without a shareable location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the link returned by [`TableStore::location`].
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Returns a copy of the rows appended to `table`, oldest first.
    ///
    /// Returns an empty list if the internal lock is poisoned. For
    /// error-propagating access, use the trait methods instead.
    #[must_use]
    pub fn rows(&self, table: &str) -> Vec<Vec<String>> {
        self.tables
            .read()
            .map(|guard| guard.get(table).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Returns the total number of rows across all tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables
            .read()
            .map(|guard| guard.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Returns `true` if no rows are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn append_row(&self, table: &str, fields: &[String]) -> TableStoreResult<()> {
        if table.is_empty() {
            return Err(TableStoreError::InvalidTableName(table.to_owned()));
        }

        let mut guard = self
            .tables
            .write()
            .map_err(|e| TableStoreError::unavailable(format!("lock poisoned: {e}")))?;
        guard
            .entry(table.to_owned())
            .or_default()
            .push(fields.to_vec());
        Ok(())
    }

    async fn location(&self) -> TableStoreResult<String> {
        self.location
            .clone()
            .ok_or_else(|| TableStoreError::unavailable("in-memory store has no location"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_owned()).collect()
    }

    #[rstest]
    #[tokio::test]
    async fn append_row_keeps_tables_separate_and_ordered() {
        let store = InMemoryTableStore::new();

        store
            .append_row("Income", &row(&["a"]))
            .await
            .expect("append should succeed");
        store
            .append_row("Expenses", &row(&["b"]))
            .await
            .expect("append should succeed");
        store
            .append_row("Income", &row(&["c"]))
            .await
            .expect("append should succeed");

        assert_eq!(store.rows("Income"), vec![row(&["a"]), row(&["c"])]);
        assert_eq!(store.rows("Expenses"), vec![row(&["b"])]);
        assert_eq!(store.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn append_row_does_not_deduplicate() {
        let store = InMemoryTableStore::new();
        let cells = row(&["24.12.2024", "500 USD"]);

        for _ in 0..2 {
            store
                .append_row("Income", &cells)
                .await
                .expect("append should succeed");
        }

        assert_eq!(store.rows("Income").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn append_row_rejects_empty_table_name() {
        let store = InMemoryTableStore::new();

        let error = store
            .append_row("", &row(&["a"]))
            .await
            .expect_err("empty table name should be rejected");

        assert!(matches!(error, TableStoreError::InvalidTableName(_)));
        assert!(store.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn location_requires_configuration() {
        let bare = InMemoryTableStore::new();
        let linked = InMemoryTableStore::new().with_location("https://sheets.example/ledger");

        assert!(bare.location().await.is_err());
        assert_eq!(
            linked.location().await.expect("location should be set"),
            "https://sheets.example/ledger"
        );
    }
}
