use super::{Comma, Formatter, Ident, Params, ToSql};

use griddle_core::stmt::{
    Assignments, Delete, Insert, Limit, OrderBy, OrderByExpr, Returning, Select, Statement,
    Update, Value,
};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let distinct = if self.distinct { "DISTINCT " } else { "" };

        fmt!(f, "SELECT " distinct self.returning " FROM " self.table.as_str() self.filter);

        if let Some(ref order_by) = self.order_by {
            fmt!(f, order_by);
        }
        if let Some(ref limit) = self.limit {
            fmt!(f, limit);
        }
    }
}

impl ToSql for &Returning {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Returning::Star => fmt!(f, "*"),
            Returning::Count => fmt!(f, "COUNT(*)"),
            Returning::Max(field) => fmt!(f, "MAX(" Ident(field) ")"),
            Returning::Min(field) => fmt!(f, "MIN(" Ident(field) ")"),
        }
    }
}

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let ignore = if self.ignore { "IGNORE " } else { "" };

        fmt!(f, "INSERT " ignore "INTO " self.table.as_str() " SET " self.assignments);
    }
}

impl ToSql for &Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "UPDATE " self.table.as_str() " SET " self.assignments self.filter);

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToSql for &Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "DELETE FROM " self.table.as_str() self.filter);

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToSql for &Assignments {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Comma(self.iter().map(|(field, value)| Assign { field, value })));
    }
}

struct Assign<'a> {
    field: &'a str,
    value: &'a Value,
}

impl ToSql for Assign<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(self.field) " = ");
        f.push_value(self.value);
    }
}

impl ToSql for &OrderBy {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, " ORDER BY " Comma(self.exprs.iter()));
    }
}

impl ToSql for &OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(&self.field) " " self.direction.as_sql());
    }
}

impl ToSql for &Limit {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, " LIMIT ");
        if let Some(offset) = self.offset {
            fmt!(f, offset ",");
        }
        fmt!(f, self.limit);
    }
}
