use crate::{QueryKind, Serializer};

use griddle_core::driver::{Connection, Response};
use griddle_core::stmt::{Statement, Type, TypedValue, Value};
use griddle_core::{Error, Result};

/// The positional parameter type string over the codes `i`, `d`, `s`, `b`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamTypes(String);

impl ParamTypes {
    pub fn new() -> ParamTypes {
        ParamTypes::default()
    }

    /// Collects the codes of already-typed parameters.
    pub fn from_params(params: &[TypedValue]) -> ParamTypes {
        ParamTypes(params.iter().map(|param| param.ty.code()).collect())
    }

    pub fn push(&mut self, ty: Type) {
        self.0.push(ty.code());
    }

    pub fn codes(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ParamTypes {
    fn from(src: &str) -> ParamTypes {
        ParamTypes(src.to_string())
    }
}

impl From<String> for ParamTypes {
    fn from(src: String) -> ParamTypes {
        ParamTypes(src)
    }
}

impl core::fmt::Display for ParamTypes {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A SQL template with its positional parameter type string and values.
///
/// The type string and the value list are stored independently of each
/// other, so a mismatch between them stays representable and is caught by
/// [`PreparedQuery::validate`] rather than at assembly time. A query is
/// consumed by execution; nothing is prepared ahead of time or cached.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
    sql: String,
    types: ParamTypes,
    params: Vec<Value>,
}

impl PreparedQuery {
    /// Serializes a statement and collects its parameters.
    pub fn from_statement(stmt: &Statement) -> PreparedQuery {
        let serializer = Serializer::new();
        let mut params: Vec<TypedValue> = Vec::new();
        let sql = serializer.serialize(stmt, &mut params);
        let types = ParamTypes::from_params(&params);
        let params = params.into_iter().map(|param| param.value).collect();
        PreparedQuery { sql, types, params }
    }

    /// Assembles a query from raw parts.
    ///
    /// Nothing is checked here; `validate` reconciles the parts before
    /// execution.
    pub fn from_parts(
        sql: impl Into<String>,
        types: impl Into<ParamTypes>,
        params: Vec<Value>,
    ) -> PreparedQuery {
        PreparedQuery {
            sql: sql.into(),
            types: types.into(),
            params,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn types(&self) -> &ParamTypes {
        &self.types
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Appends a parameter with an explicit type code.
    pub fn push(&mut self, ty: Type, value: impl Into<Value>) {
        self.types.push(ty);
        self.params.push(value.into());
    }

    pub fn kind(&self) -> Result<QueryKind> {
        QueryKind::detect(&self.sql)
    }

    /// Checks every positional value against its declared type slot.
    ///
    /// `Null` satisfies any slot. A non-string value must infer exactly the
    /// declared type, except an int in a double slot, which widens. A
    /// string value satisfies `s` always, `i` only when it spells an
    /// integer canonically, `d` under the comma-or-dot convention, and `b`
    /// only for the literals `true`/`false`.
    pub fn validate(&self) -> Result<()> {
        let declared = self.types.len();
        if declared != self.params.len() {
            return Err(Error::type_mismatch(format!(
                "{} declared parameter types for {} values",
                declared,
                self.params.len()
            )));
        }
        for (index, (code, value)) in self.types.codes().chars().zip(&self.params).enumerate() {
            let declared = Type::from_code(code)?;
            check_slot(index, declared, value)?;
        }
        Ok(())
    }

    /// Returns the validated parameters paired with their declared types.
    pub fn typed_params(&self) -> Result<Vec<TypedValue>> {
        self.validate()?;
        let mut out = Vec::with_capacity(self.params.len());
        for (code, value) in self.types.codes().chars().zip(&self.params) {
            out.push(TypedValue::new(Type::from_code(code)?, value.clone()));
        }
        Ok(out)
    }

    /// Validates, then runs the query on the connection.
    ///
    /// Row-returning kinds dispatch to [`Connection::query`], mutating
    /// kinds to [`Connection::execute`].
    pub fn execute(self, conn: &mut dyn Connection) -> Result<Response> {
        let kind = self.kind()?;
        let params = self.typed_params()?;
        if kind.is_read() {
            let rows = conn.query(&self.sql, &params)?;
            Ok(Response::values(rows))
        } else {
            let count = conn.execute(&self.sql, &params)?;
            Ok(Response::count(count))
        }
    }

    /// Renders the template with every `?` replaced by the positional
    /// parameter's literal form.
    ///
    /// Debug output only. The rendering performs no escaping and must
    /// never be executed.
    pub fn debug_sql(&self) -> String {
        let mut out = String::with_capacity(self.sql.len());
        let mut params = self.params.iter();
        for ch in self.sql.chars() {
            if ch == '?' {
                match params.next() {
                    Some(value) => out.push_str(&value.sql_literal()),
                    None => out.push(ch),
                }
            } else {
                out.push(ch);
            }
        }
        out
    }
}

fn check_slot(index: usize, declared: Type, value: &Value) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }
    match value {
        Value::String(text) => {
            let ok = match declared {
                Type::String => true,
                Type::Int => Type::parse_canonical_int(text).is_some(),
                Type::Double => Type::parse_lenient_double(text).is_some(),
                Type::Bool => matches!(text.to_lowercase().as_str(), "true" | "false"),
            };
            if ok {
                Ok(())
            } else {
                Err(slot_mismatch(index, declared, value))
            }
        }
        _ => {
            let inferred = Type::infer(value)?;
            if inferred == declared || (declared == Type::Double && inferred == Type::Int) {
                Ok(())
            } else {
                Err(slot_mismatch(index, declared, value))
            }
        }
    }
}

fn slot_mismatch(index: usize, declared: Type, value: &Value) -> Error {
    Error::type_mismatch(format!(
        "parameter {} expects `{}`, got {:?}",
        index + 1,
        declared.code(),
        value
    ))
}
