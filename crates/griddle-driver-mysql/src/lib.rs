mod value;
pub(crate) use value::Value;

use griddle_core::driver::{Driver, Row, RowSet};
use griddle_core::stmt::TypedValue;
use griddle_core::{Error, Result};

use mysql::prelude::{Queryable, ToValue};
use url::Url;

use std::fmt;

/// Blocking MySQL driver.
#[derive(Debug, Clone)]
pub struct Mysql {
    opts: mysql::Opts,
}

impl Mysql {
    /// Validates a connection URL and prepares the driver.
    ///
    /// The URL must carry a `mysql` scheme, a host, and a database path.
    /// No connection is opened until [`Driver::connect`].
    pub fn new(url: impl Into<String>) -> Result<Mysql> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::registry(format!("invalid connection url: {err}")))?;

        if url.scheme() != "mysql" {
            return Err(Error::registry(format!(
                "connection url does not have a `mysql` scheme; url={url}"
            )));
        }
        if url.host_str().is_none() {
            return Err(Error::registry(format!(
                "missing host in connection url; url={url}"
            )));
        }
        if url.path().is_empty() || url.path() == "/" {
            return Err(Error::registry(format!(
                "no database specified in connection url; url={url}"
            )));
        }

        let opts = mysql::Opts::from_url(url.as_str()).map_err(Error::database)?;
        Ok(Mysql { opts })
    }
}

impl From<mysql::Opts> for Mysql {
    fn from(opts: mysql::Opts) -> Mysql {
        Mysql { opts }
    }
}

impl Driver for Mysql {
    fn connect(&self) -> Result<Box<dyn griddle_core::driver::Connection>> {
        let conn = mysql::Conn::new(self.opts.clone()).map_err(Error::database)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

/// One open MySQL connection.
pub struct Connection {
    conn: mysql::Conn,
}

impl Connection {
    pub fn new(conn: mysql::Conn) -> Connection {
        Connection { conn }
    }

    fn prepare(&mut self, sql: &str) -> Result<mysql::Statement> {
        self.conn.prep(sql).map_err(Error::database)
    }
}

impl From<mysql::Conn> for Connection {
    fn from(conn: mysql::Conn) -> Connection {
        Connection { conn }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection").finish_non_exhaustive()
    }
}

impl griddle_core::driver::Connection for Connection {
    fn query(&mut self, sql: &str, params: &[TypedValue]) -> Result<RowSet> {
        let statement = self.prepare(sql)?;
        let rows: Vec<mysql::Row> = self
            .conn
            .exec(&statement, mysql::Params::Positional(bind_args(params)))
            .map_err(Error::database)?;

        rows.into_iter().map(convert_row).collect()
    }

    fn execute(&mut self, sql: &str, params: &[TypedValue]) -> Result<u64> {
        let statement = self.prepare(sql)?;
        self.conn
            .exec_drop(&statement, mysql::Params::Positional(bind_args(params)))
            .map_err(Error::database)?;
        Ok(self.conn.affected_rows())
    }

    fn last_insert_id(&mut self) -> Result<u64> {
        Ok(self.conn.last_insert_id())
    }
}

fn bind_args(params: &[TypedValue]) -> Vec<mysql::Value> {
    params
        .iter()
        .map(|param| Value::from(param.value.clone()).to_value())
        .collect()
}

/// Rebuilds a driver row with per-column table and name metadata, so the
/// mapper can slice multi-table rows per entity.
fn convert_row(row: mysql::Row) -> Result<Row> {
    let columns = row.columns();
    let mut out = Row::new();
    for (index, value) in row.unwrap().into_iter().enumerate() {
        let column = &columns[index];
        out.push(
            column.table_str().into_owned(),
            column.name_str().into_owned(),
            Value::from_sql(value)?.into_inner(),
        );
    }
    Ok(out)
}
