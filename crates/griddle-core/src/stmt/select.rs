use super::{Filter, Limit, OrderBy, Returning, Statement};

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table the query selects from
    pub table: String,

    /// Selected expression
    pub returning: Returning,

    /// `SELECT DISTINCT` toggle
    pub distinct: bool,

    /// Optional WHERE clause
    pub filter: Filter,

    /// Optional ORDER BY clause
    pub order_by: Option<OrderBy>,

    /// Optional LIMIT clause
    pub limit: Option<Limit>,
}

impl Select {
    /// Creates a `SELECT *` over the table.
    pub fn new(table: impl Into<String>) -> Select {
        Select {
            table: table.into(),
            returning: Returning::Star,
            distinct: false,
            filter: Filter::none(),
            order_by: None,
            limit: None,
        }
    }

    /// Creates a `SELECT COUNT(*)` over the table.
    pub fn count(table: impl Into<String>) -> Select {
        Select {
            returning: Returning::Count,
            ..Select::new(table)
        }
    }

    /// Creates a `SELECT MAX(field)` over the table.
    pub fn max(table: impl Into<String>, field: impl Into<String>) -> Select {
        Select {
            returning: Returning::Max(field.into()),
            ..Select::new(table)
        }
    }

    /// Creates a `SELECT MIN(field)` over the table.
    pub fn min(table: impl Into<String>, field: impl Into<String>) -> Select {
        Select {
            returning: Returning::Min(field.into()),
            ..Select::new(table)
        }
    }
}

impl From<Select> for Statement {
    fn from(src: Select) -> Statement {
        Statement::Select(src)
    }
}
