use crate::{Error, Result};

/// A comparison operator in a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOp {
    Eq,
    Ne,
    Lt,
    Gt,
    In,
    NotIn,
    Like,
    NotLike,
    Between,
}

impl ConditionOp {
    /// Parses an operator token.
    ///
    /// Tokens are case-insensitive and whitespace-collapsed, so `NOT  In`
    /// parses the same as `not in`. Each operator accepts its legacy
    /// synonyms (`eq`, `equal`, `neq`, `match`, and so on).
    pub fn parse(token: &str) -> Result<ConditionOp> {
        let lowered = token.to_lowercase();
        let normalized = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.as_str() {
            "=" | "eq" | "equal" => Ok(ConditionOp::Eq),
            "!=" | "<>" | "neq" | "not equal" => Ok(ConditionOp::Ne),
            "<" | "lt" | "less than" => Ok(ConditionOp::Lt),
            ">" | "gt" | "greater than" => Ok(ConditionOp::Gt),
            "in" => Ok(ConditionOp::In),
            "not in" => Ok(ConditionOp::NotIn),
            "like" | "match" => Ok(ConditionOp::Like),
            "not like" | "not match" => Ok(ConditionOp::NotLike),
            "between" => Ok(ConditionOp::Between),
            _ => Err(Error::invalid_condition_type(token)),
        }
    }

    /// Returns the SQL spelling of the operator.
    pub fn as_sql(self) -> &'static str {
        match self {
            ConditionOp::Eq => "=",
            ConditionOp::Ne => "!=",
            ConditionOp::Lt => "<",
            ConditionOp::Gt => ">",
            ConditionOp::In => "IN",
            ConditionOp::NotIn => "NOT IN",
            ConditionOp::Like => "LIKE",
            ConditionOp::NotLike => "NOT LIKE",
            ConditionOp::Between => "BETWEEN",
        }
    }
}

impl core::fmt::Display for ConditionOp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_sql())
    }
}
