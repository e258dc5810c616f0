use super::{Condition, LogicOp};

/// A tree of conditions joined by logical connectors.
///
/// Children keep their insertion order; rendering is order-preserving and
/// never rebalances the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionTree {
    /// A single condition
    Leaf(Condition),

    /// A connector over an ordered list of subtrees
    Branch {
        op: LogicOp,
        children: Vec<ConditionTree>,
    },
}

impl ConditionTree {
    /// Creates an AND branch over the given subtrees.
    pub fn and(children: Vec<ConditionTree>) -> ConditionTree {
        ConditionTree::Branch {
            op: LogicOp::And,
            children,
        }
    }

    /// Creates an OR branch over the given subtrees.
    pub fn or(children: Vec<ConditionTree>) -> ConditionTree {
        ConditionTree::Branch {
            op: LogicOp::Or,
            children,
        }
    }

    /// Creates an AND branch over single conditions.
    pub fn all(conditions: Vec<Condition>) -> ConditionTree {
        ConditionTree::and(conditions.into_iter().map(ConditionTree::Leaf).collect())
    }

    /// Creates an OR branch over single conditions.
    pub fn any(conditions: Vec<Condition>) -> ConditionTree {
        ConditionTree::or(conditions.into_iter().map(ConditionTree::Leaf).collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ConditionTree::Leaf(_))
    }
}

impl From<Condition> for ConditionTree {
    fn from(src: Condition) -> ConditionTree {
        ConditionTree::Leaf(src)
    }
}
