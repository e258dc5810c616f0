/// A LIMIT clause with an optional row offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub limit: u64,
    pub offset: Option<u64>,
}

impl Limit {
    pub fn new(limit: u64) -> Limit {
        Limit {
            limit,
            offset: None,
        }
    }

    pub fn with_offset(limit: u64, offset: u64) -> Limit {
        Limit {
            limit,
            offset: Some(offset),
        }
    }
}

impl From<u64> for Limit {
    fn from(src: u64) -> Limit {
        Limit::new(src)
    }
}
