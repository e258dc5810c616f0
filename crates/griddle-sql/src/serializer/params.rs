use super::{Formatter, ToSql};

use griddle_core::stmt::TypedValue;

pub trait Params {
    fn push(&mut self, param: &TypedValue) -> Placeholder;
}

/// What a pushed parameter renders as in the SQL text.
pub enum Placeholder {
    /// The parameter is bound positionally and renders as `?`
    Bound(usize),

    /// The parameter renders inline as a SQL literal (debug interface)
    Inline(String),
}

impl Params for Vec<TypedValue> {
    fn push(&mut self, param: &TypedValue) -> Placeholder {
        self.push(param.clone());
        Placeholder::Bound(self.len())
    }
}

/// Parameter sink that renders every value as an inline SQL literal
/// instead of binding it.
///
/// This feeds the debug interface. The rendering performs no escaping, so
/// the produced SQL is for reading, never for running.
#[derive(Debug, Default)]
pub struct InlineLiterals;

impl Params for InlineLiterals {
    fn push(&mut self, param: &TypedValue) -> Placeholder {
        Placeholder::Inline(param.value.sql_literal())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Placeholder::Bound(_) => f.dst.push('?'),
            Placeholder::Inline(literal) => f.dst.push_str(&literal),
        }
    }
}
