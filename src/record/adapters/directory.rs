//! Directory-backed implementation of the [`TableStore`] port.
//!
//! Each table is a `{table}.jsonl` file inside one data directory. A row is
//! written as a single JSON array line, so cell text never needs escaping.
//! The directory is opened through `cap_std`, which keeps every file access
//! confined to it.

use std::io::{BufRead, BufReader, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;

use crate::record::{
    error::TableStoreError,
    ports::table::{TableStore, TableStoreResult},
};

const TABLE_FILE_EXTENSION: &str = "jsonl";

/// Appends rows to JSON-lines files in a data directory.
///
/// Appends are serialised by an internal mutex, so the line order of a file
/// is the order in which appends reached the store.
#[derive(Debug, Clone)]
pub struct DirectoryTableStore {
    root: Utf8PathBuf,
    dir: Arc<Mutex<Dir>>,
}

impl DirectoryTableStore {
    /// Opens `root`, creating it and any missing parents first.
    ///
    /// # Errors
    ///
    /// Returns [`TableStoreError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> TableStoreResult<Self> {
        let root_path = root.as_ref();
        Dir::create_ambient_dir_all(root_path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(root_path, ambient_authority())?;
        Ok(Self {
            root: root_path.to_owned(),
            dir: Arc::new(Mutex::new(dir)),
        })
    }

    /// Returns the data directory path.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Reads every row of `table`, oldest first.
    ///
    /// A table that has never been written is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TableStoreError`] when the file cannot be read or holds a
    /// line that is not a JSON array of strings.
    pub async fn read_rows(&self, table: &str) -> TableStoreResult<Vec<Vec<String>>> {
        let file_name = table_file_name(table)?;
        let dir = Arc::clone(&self.dir);
        run_blocking(move || {
            let guard = lock_dir(&dir)?;
            let file = match guard.open(&file_name) {
                Ok(file) => file,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
                Err(err) => return Err(err.into()),
            };
            BufReader::new(file)
                .lines()
                .map(|line| -> TableStoreResult<Vec<String>> {
                    serde_json::from_str(&line?)
                        .map_err(|e| TableStoreError::serialization(e.to_string()))
                })
                .collect()
        })
        .await
    }
}

#[async_trait]
impl TableStore for DirectoryTableStore {
    async fn append_row(&self, table: &str, fields: &[String]) -> TableStoreResult<()> {
        let file_name = table_file_name(table)?;
        let mut line = serde_json::to_string(fields)
            .map_err(|e| TableStoreError::serialization(e.to_string()))?;
        line.push('\n');

        let dir = Arc::clone(&self.dir);
        run_blocking(move || {
            let guard = lock_dir(&dir)?;
            let mut file = guard.open_with(
                &file_name,
                OpenOptions::new().create(true).append(true),
            )?;
            file.write_all(line.as_bytes())?;
            file.flush()?;
            Ok(())
        })
        .await
    }

    async fn location(&self) -> TableStoreResult<String> {
        Ok(format!("file://{}", self.root))
    }
}

fn table_file_name(table: &str) -> TableStoreResult<String> {
    let is_valid = !table.is_empty()
        && table != "."
        && table != ".."
        && !table.contains(['/', '\\', '\0']);
    if !is_valid {
        return Err(TableStoreError::InvalidTableName(table.to_owned()));
    }
    Ok(format!("{table}.{TABLE_FILE_EXTENSION}"))
}

fn lock_dir(dir: &Mutex<Dir>) -> TableStoreResult<std::sync::MutexGuard<'_, Dir>> {
    dir.lock()
        .map_err(|e| TableStoreError::unavailable(format!("lock poisoned: {e}")))
}

/// Runs blocking file I/O on the dedicated blocking thread pool.
async fn run_blocking<F, T>(f: F) -> TableStoreResult<T>
where
    F: FnOnce() -> TableStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| TableStoreError::unavailable(format!("task join error: {e}")))?
}
