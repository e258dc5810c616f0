use super::{Assignments, Statement, Value};

/// An INSERT statement in MySQL `SET` form.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table the statement inserts into
    pub table: String,

    /// Ordered `field = value` assignments
    pub assignments: Assignments,

    /// `INSERT IGNORE` toggle
    pub ignore: bool,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Insert {
        Insert {
            table: table.into(),
            assignments: Assignments::new(),
            ignore: false,
        }
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.assignments.set(field, value);
    }
}

impl From<Insert> for Statement {
    fn from(src: Insert) -> Statement {
        Statement::Insert(src)
    }
}
