use super::{Assignments, Filter, Statement, Value};

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table the statement updates
    pub table: String,

    /// Ordered `field = value` assignments
    pub assignments: Assignments,

    /// Optional WHERE clause
    pub filter: Filter,

    /// Optional plain row limit
    pub limit: Option<u64>,
}

impl Update {
    pub fn new(table: impl Into<String>) -> Update {
        Update {
            table: table.into(),
            assignments: Assignments::new(),
            filter: Filter::none(),
            limit: None,
        }
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.assignments.set(field, value);
    }
}

impl From<Update> for Statement {
    fn from(src: Update) -> Statement {
        Statement::Update(src)
    }
}
