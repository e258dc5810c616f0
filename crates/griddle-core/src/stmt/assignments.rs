use indexmap::IndexMap;

use super::Value;

/// An ordered set of `field = value` assignments.
///
/// Insertion order is preserved through serialization; assigning an already
/// assigned field overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignments {
    fields: IndexMap<String, Value>,
}

impl Assignments {
    pub fn new() -> Assignments {
        Assignments::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn unset(&mut self, field: &str) {
        self.fields.shift_remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl<F, V> FromIterator<(F, V)> for Assignments
where
    F: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (F, V)>>(iter: T) -> Assignments {
        let mut assignments = Assignments::new();
        for (field, value) in iter {
            assignments.set(field, value);
        }
        assignments
    }
}
