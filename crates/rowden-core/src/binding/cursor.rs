use crate::value::Value;

///
/// RowCursor
///
/// External row-cursor collaborator: a result-set row positioned by the
/// caller. This layer never advances the cursor and performs no I/O of
/// its own; blocking, retries, and timeouts belong to the database
/// client behind the implementation.
///

pub trait RowCursor {
    /// Locate a column by name. `None` when the projection lacks it.
    fn ordinal(&self, column: &str) -> Option<usize>;

    /// Engine-native value at an ordinal previously returned by
    /// `ordinal` or enumerated via `column_names`. SQL null surfaces as
    /// `Value::Null`.
    fn value(&self, ordinal: usize) -> Value;

    fn is_null(&self, ordinal: usize) -> bool;

    /// Names actually present in this row, for tolerant reads.
    fn column_names(&self) -> Vec<&str>;
}
