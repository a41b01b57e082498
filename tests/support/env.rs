//! Scoped environment variable overrides for integration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Restores the overridden variables when dropped.
pub struct EnvOverride {
    previous: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvOverride {
    /// Sets or removes each variable for the guard lifetime.
    pub fn apply(changes: &[(&'static str, Option<&str>)]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = changes
            .iter()
            .map(|&(key, value)| {
                let old = env::var_os(key);
                write_var(key, value.map(OsString::from));
                (key, old)
            })
            .collect();

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            write_var(key, value);
        }
    }
}

fn write_var(key: &str, value: Option<OsString>) {
    unsafe {
        // SAFETY: ENV_MUTEX serializes environment mutations in tests.
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}
