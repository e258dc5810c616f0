/// The selected expression of a SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// `*`
    Star,

    /// `COUNT(*)`
    Count,

    /// `MAX(field)`
    Max(String),

    /// `MIN(field)`
    Min(String),
}
