use super::Direction;

/// An ORDER BY clause.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,
}

/// A single ORDER BY key.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub field: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn new(field: impl Into<String>, direction: Direction) -> OrderBy {
        OrderBy {
            exprs: vec![OrderByExpr {
                field: field.into(),
                direction,
            }],
        }
    }

    /// Appends another sort key.
    pub fn then(mut self, field: impl Into<String>, direction: Direction) -> OrderBy {
        self.exprs.push(OrderByExpr {
            field: field.into(),
            direction,
        });
        self
    }
}
