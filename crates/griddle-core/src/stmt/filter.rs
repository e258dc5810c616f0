use super::{Condition, ConditionTree};

/// An optional WHERE clause.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub root: Option<ConditionTree>,
}

impl Filter {
    /// Creates an empty filter; no WHERE clause is rendered.
    pub fn none() -> Filter {
        Filter { root: None }
    }

    pub fn new(root: impl Into<ConditionTree>) -> Filter {
        Filter {
            root: Some(root.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl From<Condition> for Filter {
    fn from(src: Condition) -> Filter {
        Filter::new(src)
    }
}

impl From<ConditionTree> for Filter {
    fn from(src: ConditionTree) -> Filter {
        Filter::new(src)
    }
}

impl From<Option<ConditionTree>> for Filter {
    fn from(src: Option<ConditionTree>) -> Filter {
        Filter { root: src }
    }
}
