use super::RowSet;

/// Response from executing a statement.
#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

/// The rows component of a response.
#[derive(Debug)]
pub enum Rows {
    /// Number of rows affected by the statement
    Count(u64),

    /// Rows returned by the statement
    Values(RowSet),
}

impl Response {
    /// Creates a response from a count of affected rows.
    pub fn count(count: u64) -> Response {
        Response {
            rows: Rows::Count(count),
        }
    }

    /// Creates a response from returned rows.
    pub fn values(rows: RowSet) -> Response {
        Response {
            rows: Rows::Values(rows),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Rows::Count(_))
    }

    pub fn as_count(&self) -> Option<u64> {
        match self {
            Rows::Count(count) => Some(*count),
            _ => None,
        }
    }

    #[track_caller]
    pub fn into_count(self) -> u64 {
        match self {
            Rows::Count(count) => count,
            _ => panic!("expected an affected-row count; rows={self:#?}"),
        }
    }

    #[track_caller]
    pub fn into_values(self) -> RowSet {
        match self {
            Rows::Values(rows) => rows,
            _ => panic!("expected result rows; rows={self:#?}"),
        }
    }
}
