use super::{Filter, Statement};

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Table the statement deletes from
    pub table: String,

    /// Optional WHERE clause
    pub filter: Filter,

    /// Optional plain row limit
    pub limit: Option<u64>,
}

impl Delete {
    pub fn new(table: impl Into<String>) -> Delete {
        Delete {
            table: table.into(),
            filter: Filter::none(),
            limit: None,
        }
    }
}

impl From<Delete> for Statement {
    fn from(src: Delete) -> Statement {
        Statement::Delete(src)
    }
}
