use crate::stmt::Value;

/// A single result cell with its column metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RowColumn {
    /// Originating table name; empty for computed columns
    pub table: String,

    /// Column name
    pub name: String,

    pub value: Value,
}

/// A result row.
///
/// Cells keep the driver's column order and carry the originating table
/// name, so a row from a multi-table query can be sliced per entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<RowColumn>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    /// Builds a row whose cells all belong to one table.
    pub fn from_values<I, N, V>(table: &str, cells: I) -> Row
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Value>,
    {
        let mut row = Row::new();
        for (name, value) in cells {
            row.push(table, name, value);
        }
        row
    }

    /// Appends a cell.
    pub fn push(&mut self, table: impl Into<String>, name: impl Into<String>, value: impl Into<Value>) {
        self.columns.push(RowColumn {
            table: table.into(),
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn get(&self, table: &str, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|cell| cell.table == table && cell.name == name)
            .map(|cell| &cell.value)
    }

    /// Iterates the cells belonging to the given table.
    pub fn columns_for<'a>(&'a self, table: &'a str) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.columns
            .iter()
            .filter(move |cell| cell.table == table)
            .map(|cell| (cell.name.as_str(), &cell.value))
    }

    /// Returns the single cell of a one-column row.
    pub fn single_value(&self) -> Option<&Value> {
        match self.columns.as_slice() {
            [cell] => Some(&cell.value),
            _ => None,
        }
    }

    pub fn columns(&self) -> &[RowColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// An ordered set of result rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    pub fn new() -> RowSet {
        RowSet::default()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl From<Vec<Row>> for RowSet {
    fn from(rows: Vec<Row>) -> RowSet {
        RowSet { rows }
    }
}

impl IntoIterator for RowSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl FromIterator<Row> for RowSet {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> RowSet {
        RowSet {
            rows: iter.into_iter().collect(),
        }
    }
}
