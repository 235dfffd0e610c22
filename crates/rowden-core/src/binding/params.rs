use crate::{error::BindError, value::Value};

///
/// Params
///
/// External parameter-set collaborator for a parameterized write. Keys
/// are `@`-prefixed column names. A strict parameter set rejects keys it
/// was not seeded with; that rejection is the strict writer's
/// missing-key failure.
///

pub trait Params {
    /// Assign a value to an existing key.
    fn set(&mut self, key: &str, value: Value) -> Result<(), BindError>;

    fn contains(&self, key: &str) -> bool;

    /// Keys actually present, for tolerant writes.
    fn keys(&self) -> Vec<&str>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parameter key for a column: `@` plus the column name.
#[must_use]
pub fn parameter_name(column: &str) -> String {
    format!("@{column}")
}

/// Column name behind a parameter key, if it carries the `@` marker.
#[must_use]
pub fn column_for_parameter(key: &str) -> Option<&str> {
    key.strip_prefix('@')
}
