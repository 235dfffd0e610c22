use crate::value::ValueTy;
use thiserror::Error as ThisError;

///
/// ValueError
///
/// A supplied value could not be narrowed to a field's storage type.
/// Programmer error; propagate immediately.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValueError {
    #[error("expected {expected}, got {actual}")]
    TypeMismatch { expected: ValueTy, actual: ValueTy },

    #[error("value {value} does not fit in {ty}")]
    OutOfRange { ty: ValueTy, value: i128 },
}

///
/// SchemaError
///
/// Static schema mismatch surfaced by the name-keyed record surface.
/// Never retried, never recovered locally.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("unrecognized column `{column}` on table `{table}`")]
    UnknownColumn { table: &'static str, column: String },

    #[error("column `{table}.{column}`: {source}")]
    Value {
        table: &'static str,
        column: &'static str,
        source: ValueError,
    },
}

impl SchemaError {
    /// Construct the unrecognized-column failure for a table.
    pub fn unknown_column(table: &'static str, column: &str) -> Self {
        Self::UnknownColumn {
            table,
            column: column.to_string(),
        }
    }
}

///
/// BindError
///
/// Strict reader/writer bindings fail fast when the collaborator does not
/// line up with the schema. Tolerant variants skip instead.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BindError {
    #[error("cursor is missing expected column `{column}` of table `{table}`")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("parameter set is missing expected key `{key}`")]
    MissingParameter { key: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

///
/// ValidateError
///
/// Inconsistencies between a table's declared column lists and metadata.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("table `{table}` declares column `{column}` more than once")]
    DuplicateColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("table `{table}`: key/non-key lists do not partition the column list")]
    BrokenPartition { table: &'static str },

    #[error("table `{table}`: column `{column}` metadata disagrees with the schema ({detail})")]
    MetadataMismatch {
        table: &'static str,
        column: &'static str,
        detail: String,
    },
}
