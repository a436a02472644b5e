//! Once-only configuration store.
//!
//! # Responsibilities
//! - Hold the single process-lifetime configuration
//! - Close the single-installation race under concurrent first use
//!
//! # Design Decisions
//! - Two explicit entry points instead of one function branching on a debug
//!   flag: the production path (`install`/`load_once`) errors on reuse, and
//!   `reset` exists for tests to swap configs between runs
//! - Mutex-guarded check-and-set, not a plain check-then-act

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::config::loader::{self, ConfigError};
use crate::config::schema::AppConfig;

static STORE: Mutex<Option<AppConfig>> = Mutex::new(None);

fn slot() -> MutexGuard<'static, Option<AppConfig>> {
    match STORE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Install the process configuration. Errors if one is already installed.
pub fn install(config: AppConfig) -> Result<(), ConfigError> {
    let mut guard = slot();
    if guard.is_some() {
        return Err(ConfigError::AlreadySet);
    }
    *guard = Some(config);
    Ok(())
}

/// Load from disk, validate, and install in one step. The production
/// startup path.
pub fn load_once(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = loader::load(path)?;
    install(config.clone())?;
    Ok(config)
}

/// Snapshot of the installed configuration, if any.
pub fn get() -> Option<AppConfig> {
    slot().clone()
}

/// Discard the installed configuration so a fresh one can be installed.
/// Test-only escape hatch; production code never calls this.
pub fn reset() {
    *slot() = None;
}
