//! Shared world state for record intake BDD scenarios.

use std::sync::Arc;

use async_trait::async_trait;
use rstest::fixture;
use tallybook::record::{
    adapters::InMemoryTableStore,
    error::TableStoreError,
    ports::{TableStore, TableStoreResult},
    services::{IntakeReply, TableNames},
};

/// In-memory store that can be told to fail appends.
#[derive(Debug, Clone, Default)]
pub struct ScenarioStore {
    pub inner: InMemoryTableStore,
    pub reject_appends: bool,
}

#[async_trait]
impl TableStore for ScenarioStore {
    async fn append_row(&self, table: &str, fields: &[String]) -> TableStoreResult<()> {
        if self.reject_appends {
            return Err(TableStoreError::unavailable("appends disabled for scenario"));
        }
        self.inner.append_row(table, fields).await
    }

    async fn location(&self) -> TableStoreResult<String> {
        self.inner.location().await
    }
}

/// Scenario world for record intake behaviour tests.
#[derive(Default)]
pub struct IntakeWorld {
    pub store: ScenarioStore,
    pub tables: TableNames,
    pub command: Option<String>,
    pub body: Vec<String>,
    pub last_reply: Option<IntakeReply>,
}

impl IntakeWorld {
    /// Joins the pending command and body into one chat message.
    pub fn message(&self) -> Result<String, eyre::Report> {
        let command = self
            .command
            .as_deref()
            .ok_or_else(|| eyre::eyre!("missing command in scenario world"))?;
        let mut lines = vec![command.to_owned()];
        lines.extend(self.body.iter().cloned());
        Ok(lines.join("\n"))
    }

    /// Returns the reply produced by the `when` step.
    pub fn reply(&self) -> Result<&IntakeReply, eyre::Report> {
        self.last_reply
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing reply in scenario world"))
    }

    /// Shared handle used to build the service under test.
    #[must_use]
    pub fn shared_store(&self) -> Arc<ScenarioStore> {
        Arc::new(self.store.clone())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> IntakeWorld {
    IntakeWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
