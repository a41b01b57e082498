//! Handles one chat message read from stdin and prints the reply.
//!
//! Usage:
//!
//! ```text
//! printf '/expense\n24.12.2024\n319 USD\n\n\nSalary\nKate\n' | tallybook
//! ```
//!
//! Rows are appended to `{table}.jsonl` files in the data directory
//! configured by `TALLYBOOK_DATA_DIR` (see [`tallybook::config`]). A `.env`
//! file in the working directory is loaded first when present.
//!
//! The exit status is `0` when the message was handled, `2` when it failed
//! validation and `1` when the table store rejected a valid record.

use std::process::ExitCode;
use std::sync::Arc;

use eyre::{Result, WrapErr};
use tallybook::{
    config::Settings,
    record::{
        adapters::DirectoryTableStore,
        services::{IntakeOutcome, RecordIntakeService},
    },
    telemetry,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env().wrap_err("invalid configuration")?;
    telemetry::init(&settings.log_level)?;

    let store = DirectoryTableStore::open(&settings.data_dir)
        .wrap_err_with(|| format!("failed to open data directory {}", settings.data_dir))?;
    tracing::info!(data_dir = %settings.data_dir, "table store opened");

    let service = RecordIntakeService::with_default_validators(Arc::new(store), settings.tables)?;

    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .wrap_err("failed to read message from stdin")?;

    let reply = service.handle(&text).await;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(reply.text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(match reply.outcome {
        IntakeOutcome::Recorded { .. } | IntakeOutcome::Informational => ExitCode::SUCCESS,
        IntakeOutcome::Rejected { .. } => ExitCode::from(2),
        IntakeOutcome::StorageFailed { .. } => ExitCode::FAILURE,
    })
}
