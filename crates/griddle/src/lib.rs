mod db;
pub use db::Db;

mod lower;

mod mapper;
pub use mapper::{Mapper, RecordKey, Records};

pub mod ops;

mod record;
pub use record::Record;

mod registry;
pub use registry::Registry;

pub use griddle_core::{driver, schema, stmt, Connection, Error, Result};
pub use griddle_sql::{ParamTypes, PreparedQuery, QueryKind, Serializer};
