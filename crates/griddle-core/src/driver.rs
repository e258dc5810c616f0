mod response;
pub use response::{Response, Rows};

mod row;
pub use row::{Row, RowColumn, RowSet};

use crate::stmt::TypedValue;
use crate::Result;

use std::fmt::Debug;

/// A database driver capable of opening connections.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a new connection.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open database connection.
///
/// Execution is blocking and exclusive. The caller hands over the SQL text
/// and the positional parameters already typed; the driver binds them in
/// order.
pub trait Connection: Debug + Send + 'static {
    /// Runs a row-returning statement.
    fn query(&mut self, sql: &str, params: &[TypedValue]) -> Result<RowSet>;

    /// Runs a mutating statement, returning the affected row count.
    fn execute(&mut self, sql: &str, params: &[TypedValue]) -> Result<u64>;

    /// Returns the id generated by the last INSERT on this connection.
    fn last_insert_id(&mut self) -> Result<u64>;
}
