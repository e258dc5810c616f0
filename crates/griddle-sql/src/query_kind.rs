use griddle_core::{Error, Result};

/// The leading keyword of a SQL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Select,
    Insert,
    Update,
    Delete,
    Describe,
    Show,
    Truncate,
}

impl QueryKind {
    /// Detects the kind from the first whitespace-delimited token of the
    /// template, case-insensitively.
    pub fn detect(sql: &str) -> Result<QueryKind> {
        let keyword = sql.split_whitespace().next().unwrap_or("");
        match keyword.to_uppercase().as_str() {
            "SELECT" => Ok(QueryKind::Select),
            "INSERT" => Ok(QueryKind::Insert),
            "UPDATE" => Ok(QueryKind::Update),
            "DELETE" => Ok(QueryKind::Delete),
            "DESCRIBE" => Ok(QueryKind::Describe),
            "SHOW" => Ok(QueryKind::Show),
            "TRUNCATE" => Ok(QueryKind::Truncate),
            _ => Err(Error::unknown_query_type(keyword)),
        }
    }

    /// Returns `true` for kinds that return rows rather than mutate.
    pub fn is_read(self) -> bool {
        matches!(self, QueryKind::Select | QueryKind::Describe | QueryKind::Show)
    }
}
