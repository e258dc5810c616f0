/// A logical connector in a condition tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    /// Returns the SQL spelling of the connector.
    pub fn as_sql(self) -> &'static str {
        match self {
            LogicOp::And => "AND",
            LogicOp::Or => "OR",
        }
    }

    /// Returns the identity literal the rendered fold is seeded with.
    ///
    /// `1` is neutral for AND and `0` for OR, so the seeded fold stays a
    /// valid expression for any child count.
    pub fn identity(self) -> &'static str {
        match self {
            LogicOp::And => "1",
            LogicOp::Or => "0",
        }
    }
}

impl core::fmt::Display for LogicOp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_sql())
    }
}
