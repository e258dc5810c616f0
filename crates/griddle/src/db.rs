use crate::{ops, Record, Records, Registry};

use griddle_core::driver::{Connection, Response};
use griddle_core::schema::Table;
use griddle_core::stmt::{Filter, Limit, OrderBy, Value};
use griddle_core::{Error, Result};
use griddle_sql::PreparedQuery;

use url::Url;

use std::sync::Arc;

/// Front object over a connection registry.
///
/// Every operation targets the registry's current selection. The registry
/// is owned, never ambient: two `Db` values are fully independent.
#[derive(Debug, Default)]
pub struct Db {
    registry: Registry,
}

impl Db {
    pub fn new() -> Db {
        Db::default()
    }

    /// Builds a `Db` around an existing registry.
    pub fn with_registry(registry: Registry) -> Db {
        Db { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Opens a connection from a database URL and registers it under the
    /// given name.
    ///
    /// The first connection registered while nothing is selected becomes
    /// the current selection.
    pub fn connect(&self, name: impl Into<String>, url: &str) -> Result<()> {
        let name = name.into();
        let conn = open(url)
            .map_err(|err| err.context(Error::registry(format!("opening `{name}`"))))?;
        self.registry.insert(&name, conn)?;
        if self.registry.current_name()?.is_none() {
            self.registry.set_current(&name)?;
        }
        Ok(())
    }

    /// Switches the current selection.
    pub fn use_connection(&self, name: &str) -> Result<()> {
        self.registry.set_current(name)
    }

    pub fn save(&self, record: &mut Record) -> Result<Value> {
        self.registry.with_current(|conn| ops::save(conn, record))
    }

    pub fn insert(&self, record: &mut Record) -> Result<Value> {
        self.registry.with_current(|conn| ops::insert(conn, record))
    }

    pub fn insert_ignore(&self, record: &mut Record) -> Result<Value> {
        self.registry
            .with_current(|conn| ops::insert_ignore(conn, record))
    }

    pub fn update(&self, record: &Record) -> Result<Value> {
        self.registry.with_current(|conn| ops::update(conn, record))
    }

    pub fn delete(&self, record: &Record) -> Result<u64> {
        self.registry.with_current(|conn| ops::delete(conn, record))
    }

    pub fn select_by_id(&self, table: &Arc<Table>, key: impl Into<Value>) -> Result<Option<Record>> {
        self.registry
            .with_current(|conn| ops::select_by_id(conn, table, key))
    }

    pub fn select_by_field(
        &self,
        table: &Arc<Table>,
        field: &str,
        probe: impl Into<Value>,
    ) -> Result<Option<Record>> {
        self.registry
            .with_current(|conn| ops::select_by_field(conn, table, field, probe))
    }

    pub fn select_one_where(
        &self,
        table: &Arc<Table>,
        filter: impl Into<Filter>,
    ) -> Result<Option<Record>> {
        self.registry
            .with_current(|conn| ops::select_one_where(conn, table, filter))
    }

    pub fn select_all(&self, table: &Arc<Table>) -> Result<Records> {
        self.registry
            .with_current(|conn| ops::select_all(conn, table))
    }

    pub fn select_where(
        &self,
        table: &Arc<Table>,
        filter: impl Into<Filter>,
        order_by: Option<OrderBy>,
        limit: Option<Limit>,
    ) -> Result<Records> {
        self.registry
            .with_current(|conn| ops::select_where(conn, table, filter, order_by, limit))
    }

    pub fn count(&self, table: &Table, filter: impl Into<Filter>) -> Result<i64> {
        self.registry
            .with_current(|conn| ops::count(conn, table, filter))
    }

    pub fn max(&self, table: &Table, field: &str, filter: impl Into<Filter>) -> Result<Value> {
        self.registry
            .with_current(|conn| ops::max(conn, table, field, filter))
    }

    pub fn min(&self, table: &Table, field: &str, filter: impl Into<Filter>) -> Result<Value> {
        self.registry
            .with_current(|conn| ops::min(conn, table, field, filter))
    }

    /// Runs a hand-assembled query against the current connection.
    pub fn execute(&self, query: PreparedQuery) -> Result<Response> {
        self.registry.with_current(|conn| query.execute(conn))
    }
}

fn open(url: &str) -> Result<Box<dyn Connection>> {
    let url = Url::parse(url)
        .map_err(|err| Error::registry(format!("invalid connection url: {err}")))?;
    match url.scheme() {
        "mysql" => connect_mysql(&url),
        scheme => Err(Error::unsupported(format!("database scheme `{scheme}`"))),
    }
}

#[cfg(feature = "mysql")]
fn connect_mysql(url: &Url) -> Result<Box<dyn Connection>> {
    use griddle_core::driver::Driver;

    let driver = griddle_driver_mysql::Mysql::new(url.as_str())?;
    driver.connect()
}

#[cfg(not(feature = "mysql"))]
fn connect_mysql(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::unsupported("`mysql` feature not enabled"))
}
