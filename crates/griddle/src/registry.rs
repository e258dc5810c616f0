use griddle_core::driver::Connection;
use griddle_core::{Error, Result};

use indexmap::IndexMap;

use std::sync::{Arc, Mutex};

/// Named connections plus the mutable "current" selection.
///
/// Every operation that targets "the" database goes through the current
/// selection, so the whole map sits behind one mutex. Each connection lives
/// in its own `Arc<Mutex<..>>` slot; statement execution locks the slot
/// only, never the registry, so registering or switching connections on one
/// thread cannot stall a statement running on another.
#[derive(Debug, Default)]
pub struct Registry {
    inner: Mutex<Inner>,
}

type Slot = Arc<Mutex<Box<dyn Connection>>>;

#[derive(Debug, Default)]
struct Inner {
    connections: IndexMap<String, Slot>,
    current: Option<String>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Registers a connection under a name.
    pub fn insert(&self, name: impl Into<String>, conn: Box<dyn Connection>) -> Result<()> {
        let name = name.into();
        let mut inner = self.lock()?;
        if inner.connections.contains_key(&name) {
            return Err(Error::registry(format!(
                "a connection named `{name}` is already registered"
            )));
        }
        inner.connections.insert(name, Arc::new(Mutex::new(conn)));
        Ok(())
    }

    /// Drops a named connection. Removing the current selection clears it.
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut inner = self.lock()?;
        if inner.connections.shift_remove(name).is_none() {
            return Err(Error::registry(format!("no connection named `{name}`")));
        }
        if inner.current.as_deref() == Some(name) {
            inner.current = None;
        }
        Ok(())
    }

    /// Selects the connection subsequent operations target.
    pub fn set_current(&self, name: &str) -> Result<()> {
        let mut inner = self.lock()?;
        if !inner.connections.contains_key(name) {
            return Err(Error::registry(format!("no connection named `{name}`")));
        }
        inner.current = Some(name.to_string());
        Ok(())
    }

    /// Returns the name of the current selection, if any.
    pub fn current_name(&self) -> Result<Option<String>> {
        Ok(self.lock()?.current.clone())
    }

    /// Runs a closure against the current connection.
    pub fn with_current<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Connection) -> Result<T>,
    {
        let slot = {
            let inner = self.lock()?;
            let name = inner
                .current
                .as_deref()
                .ok_or_else(|| Error::registry("no current connection"))?;
            self.slot(&inner, name)?
        };
        Registry::run(&slot, f)
    }

    /// Runs a closure against a named connection.
    pub fn with<F, T>(&self, name: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Connection) -> Result<T>,
    {
        let slot = {
            let inner = self.lock()?;
            self.slot(&inner, name)?
        };
        Registry::run(&slot, f)
    }

    fn slot(&self, inner: &Inner, name: &str) -> Result<Slot> {
        inner
            .connections
            .get(name)
            .cloned()
            .ok_or_else(|| Error::registry(format!("no connection named `{name}`")))
    }

    // The registry lock is released before the slot lock is taken, so a
    // long-running statement never blocks registry bookkeeping.
    fn run<F, T>(slot: &Slot, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn Connection) -> Result<T>,
    {
        let mut conn = slot
            .lock()
            .map_err(|_| Error::registry("connection lock poisoned"))?;
        f(conn.as_mut())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| Error::registry("registry lock poisoned"))
    }
}
