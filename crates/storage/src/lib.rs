//! Session-scoped persistence for the task collection.
//!
//! A store lives for one run of the program. It is handed to the controller by
//! whoever builds it, so tests and the desktop app can each bring their own.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Context, Result};
use shared::domain::Task;

/// Synchronous save/load pair for the whole task collection. Last write wins.
pub trait SessionStore {
    fn persist(&mut self, tasks: &[Task]) -> Result<()>;

    /// Collection saved by the last `persist`, or empty if nothing was saved yet.
    fn restore(&self) -> Result<Vec<Task>>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn persist(&mut self, tasks: &[Task]) -> Result<()> {
        (**self).persist(tasks)
    }

    fn restore(&self) -> Result<Vec<Task>> {
        (**self).restore()
    }
}

/// In-process slot holding the serialized collection.
///
/// Clones share the slot, so a controller rebuilt later in the same session
/// restores whatever the previous one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON currently held, if anything was persisted.
    pub fn snapshot_json(&self) -> Result<Option<String>> {
        Ok(self.lock()?.clone())
    }

    /// Forget the saved collection; the next `restore` yields nothing.
    pub fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }

    /// Overwrite the slot with arbitrary text.
    pub fn replace_raw(&self, raw: impl Into<String>) -> Result<()> {
        *self.lock()? = Some(raw.into());
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<String>>> {
        self.slot
            .lock()
            .map_err(|_| anyhow!("session store slot poisoned"))
    }
}

impl SessionStore for MemorySessionStore {
    fn persist(&mut self, tasks: &[Task]) -> Result<()> {
        let serialized =
            serde_json::to_string(tasks).context("failed to serialize task collection")?;
        tracing::trace!(tasks = tasks.len(), bytes = serialized.len(), "session store: persist");
        *self.lock()? = Some(serialized);
        Ok(())
    }

    fn restore(&self) -> Result<Vec<Task>> {
        let guard = self.lock()?;
        let Some(raw) = guard.as_deref() else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(raw).context("session store slot holds an unreadable task collection")
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
