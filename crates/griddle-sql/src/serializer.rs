#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

mod params;
pub use params::{InlineLiterals, Params, Placeholder};

// Fragment serializers
mod condition;
mod statement;

use griddle_core::stmt::{ConditionTree, Statement, TypedValue, Value};

/// Serialize a statement to a SQL string.
///
/// The dialect is MySQL: `?` placeholders, backtick-quoted column
/// identifiers, bare table names.
#[derive(Debug, Default)]
pub struct Serializer;

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }

    /// Serializes a condition tree the way a WHERE clause embeds it,
    /// leading space included.
    pub fn serialize_tree(&self, tree: &ConditionTree, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        condition::render_root(tree, &mut fmt);

        ret
    }
}

impl<P: Params> Formatter<'_, P> {
    /// Pushes a value as a positional parameter and writes its placeholder.
    ///
    /// The parameter type is inferred from the value; `Null` lands in a
    /// string slot.
    fn push_value(&mut self, value: &Value) {
        let param = TypedValue::infer(value.clone());
        let placeholder = self.params.push(&param);
        placeholder.to_sql(self);
    }
}
