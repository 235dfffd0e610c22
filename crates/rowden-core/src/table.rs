use crate::{error::SchemaError, metadata::ColumnMetadata, value::Value};
use std::fmt;

///
/// TableRecord
///
/// The engine seam every generated table record implements. Columns are a
/// closed, compile-time-known set: internal callers dispatch on the
/// per-table `Column` enum, and only the string boundary (query results,
/// dynamic callers) goes through `column_from_name`, which is the single
/// place the unrecognized-column failure lives.
///
/// Schema constants must stay consistent with each other (key ∪ non-key =
/// all columns, disjoint, no duplicates); `validate::<R>()` checks this.
///

pub trait TableRecord: Sized {
    const TABLE_NAME: &'static str;

    /// Closed per-table column tag. Group columns carry their key.
    type Column: Copy + fmt::Debug + PartialEq + 'static;

    /// All column names, declaration order (group columns last, key order).
    fn columns() -> &'static [&'static str];

    /// Names of the declared primary-key columns. May be empty: some
    /// tables declare no key even though they carry an `id`-like column,
    /// and that declaration is preserved as-is.
    fn key_columns() -> &'static [&'static str];

    fn non_key_columns() -> &'static [&'static str];

    /// Every column tag, in the same order as `columns()`. Built once.
    fn all_columns() -> &'static [Self::Column];

    fn column_from_name(name: &str) -> Result<Self::Column, SchemaError>;

    fn column_name(column: Self::Column) -> &'static str;

    fn column_metadata(column: Self::Column) -> &'static ColumnMetadata;

    /// Current value of one column.
    fn get(&self, column: Self::Column) -> Value;

    /// Assign one column from a boundary value, narrowing to the field's
    /// storage type. Fails fast on an incompatible value.
    fn set(&mut self, column: Self::Column, value: Value) -> Result<(), SchemaError>;

    // ---- string boundary ------------------------------------------------

    #[must_use]
    fn column_count() -> usize {
        Self::columns().len()
    }

    fn get_by_name(&self, name: &str) -> Result<Value, SchemaError> {
        Ok(self.get(Self::column_from_name(name)?))
    }

    fn set_by_name(&mut self, name: &str, value: Value) -> Result<(), SchemaError> {
        self.set(Self::column_from_name(name)?, value)
    }

    fn column_metadata_by_name(name: &str) -> Result<&'static ColumnMetadata, SchemaError> {
        Ok(Self::column_metadata(Self::column_from_name(name)?))
    }
}
