use crate::{
    binding::{
        cursor::RowCursor,
        params::{Params, parameter_name},
    },
    error::BindError,
    table::TableRecord,
    value::Value,
};
use std::collections::BTreeMap;

///
/// MemoryRow
///
/// In-memory row cursor: a single materialized row keyed by column name.
/// Serves as the concrete collaborator for tests and for callers that
/// already hold row data outside a live result set.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryRow {
    columns: Vec<(String, Value)>,
}

impl MemoryRow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Add one column. Builder-style; duplicate names keep the first hit
    /// on lookup, so don't add them.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
        self.columns.push((column.into(), value));
        self
    }

    /// A full-projection row mirroring a record's current values.
    #[must_use]
    pub fn from_record<R: TableRecord>(record: &R) -> Self {
        let columns = R::all_columns()
            .iter()
            .map(|&column| (R::column_name(column).to_string(), record.get(column)))
            .collect();

        Self { columns }
    }
}

impl RowCursor for MemoryRow {
    fn ordinal(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|(name, _)| name == column)
    }

    fn value(&self, ordinal: usize) -> Value {
        self.columns[ordinal].1.clone()
    }

    fn is_null(&self, ordinal: usize) -> bool {
        self.columns[ordinal].1.is_null()
    }

    fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }
}

///
/// MemoryParams
///
/// In-memory strict parameter set: keys must be seeded up front, and
/// assigning an unseeded key is the missing-parameter failure.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryParams {
    slots: BTreeMap<String, Option<Value>>,
}

impl MemoryParams {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Seed one key with no value yet.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.slots.insert(key.into(), None);
        self
    }

    /// Seed `@column` keys for every column of a table.
    #[must_use]
    pub fn for_table<R: TableRecord>() -> Self {
        let slots = R::columns()
            .iter()
            .map(|column| (parameter_name(column), None))
            .collect();

        Self { slots }
    }

    /// Value assigned to a key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.slots.get(key).and_then(Option::as_ref)
    }

    /// Re-expose assigned parameters as a row cursor, `@` markers
    /// stripped. Unassigned slots are omitted.
    #[must_use]
    pub fn to_row(&self) -> MemoryRow {
        self.slots
            .iter()
            .filter_map(|(key, slot)| {
                let value = slot.clone()?;
                Some((key.trim_start_matches('@').to_string(), value))
            })
            .fold(MemoryRow::new(), |row, (column, value)| {
                row.with(column, value)
            })
    }
}

impl Params for MemoryParams {
    fn set(&mut self, key: &str, value: Value) -> Result<(), BindError> {
        match self.slots.get_mut(key) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            }
            None => Err(BindError::MissingParameter {
                key: key.to_string(),
            }),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    fn keys(&self) -> Vec<&str> {
        self.slots.keys().map(String::as_str).collect()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}
