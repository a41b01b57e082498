//! Runtime settings loaded from environment variables.
//!
//! | Variable              | Default    | Description                         |
//! |-----------------------|------------|-------------------------------------|
//! | `INCOME_SHEET_NAME`   | `Income`   | Table receiving `/income` rows      |
//! | `EXPENSES_SHEET_NAME` | `Expenses` | Table receiving `/expense` rows     |
//! | `LOG_LEVEL`           | `info`     | Fallback filter when `RUST_LOG` is unset |
//! | `TALLYBOOK_DATA_DIR`  | `data`     | Directory holding the table files   |
//!
//! Empty values count as unset.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::record::services::TableNames;

/// Variable naming the income table.
pub const INCOME_TABLE_VAR: &str = "INCOME_SHEET_NAME";
/// Variable naming the expense table.
pub const EXPENSE_TABLE_VAR: &str = "EXPENSES_SHEET_NAME";
/// Variable holding the fallback log filter.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
/// Variable holding the data directory.
pub const DATA_DIR_VAR: &str = "TALLYBOOK_DATA_DIR";

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_DATA_DIR: &str = "data";

/// Errors raised while loading [`Settings`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A table name cannot be used as a file name.
    #[error("{variable} must be a plain table name, got '{value}'")]
    InvalidTableName {
        /// Offending variable.
        variable: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Destination table per record kind.
    pub tables: TableNames,
    /// Fallback `tracing` filter directive.
    pub log_level: String,
    /// Directory holding the table files.
    pub data_dir: Utf8PathBuf,
}

impl Settings {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unusable value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallybook::config::Settings;
    ///
    /// let settings = Settings::from_lookup(|name| {
    ///     (name == "INCOME_SHEET_NAME").then(|| "Payments".to_owned())
    /// })
    /// .expect("settings should load");
    ///
    /// assert_eq!(settings.tables.income, "Payments");
    /// assert_eq!(settings.tables.expense, "Expenses");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = move |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = TableNames::default();

        let income = table_name(INCOME_TABLE_VAR, read(INCOME_TABLE_VAR), defaults.income)?;
        let expense = table_name(EXPENSE_TABLE_VAR, read(EXPENSE_TABLE_VAR), defaults.expense)?;
        let log_level = read(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());
        let data_dir = read(DATA_DIR_VAR)
            .map_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR), Utf8PathBuf::from);

        Ok(Self {
            tables: TableNames::new(income, expense),
            log_level,
            data_dir,
        })
    }
}

fn table_name(
    variable: &'static str,
    value: Option<String>,
    default: String,
) -> Result<String, ConfigError> {
    let Some(name) = value else {
        return Ok(default);
    };
    let trimmed = name.trim();
    if trimmed == "." || trimmed == ".." || trimmed.contains(['/', '\\', '\0']) {
        return Err(ConfigError::InvalidTableName { variable, value: name });
    }
    Ok(trimmed.to_owned())
}
