use crate::{
    binding::{
        cursor::RowCursor,
        sink::{BindEvent, BindSink},
    },
    error::BindError,
    table::TableRecord,
};

/// Strict reader binding: hydrate every schema column from the cursor.
///
/// Each column is located by name (failing with `MissingColumn` if the
/// projection lacks it), read exactly once, null-handled, narrowed, and
/// assigned. Column order is immaterial; advancing the cursor afterwards
/// is the caller's responsibility.
pub fn read_values<R: TableRecord>(
    cursor: &impl RowCursor,
    record: &mut R,
) -> Result<(), BindError> {
    for &column in R::all_columns() {
        let name = R::column_name(column);
        let ordinal = cursor.ordinal(name).ok_or_else(|| BindError::MissingColumn {
            table: R::TABLE_NAME,
            column: name,
        })?;

        record.set(column, cursor.value(ordinal))?;
    }

    Ok(())
}

/// Tolerant reader binding for partial-projection queries.
///
/// Iterates the columns actually present in the cursor and assigns only
/// those matching a schema column; everything else is skipped silently.
/// Fields without a matching cursor column keep their pre-call values,
/// so callers must not assume full hydration. Returns the number of
/// columns applied. A type-incompatible value still fails fast.
pub fn try_read_values<R: TableRecord>(
    cursor: &impl RowCursor,
    record: &mut R,
) -> Result<usize, BindError> {
    try_read_values_with_sink(cursor, record, &mut ())
}

/// `try_read_values`, reporting every skipped column to the sink.
pub fn try_read_values_with_sink<R: TableRecord>(
    cursor: &impl RowCursor,
    record: &mut R,
    sink: &mut impl BindSink,
) -> Result<usize, BindError> {
    let mut applied = 0;

    for name in cursor.column_names() {
        let Ok(column) = R::column_from_name(name) else {
            sink.on_event(BindEvent::SkippedColumn {
                table: R::TABLE_NAME,
                column: name.to_string(),
            });
            continue;
        };

        // the name came from the cursor itself, so the ordinal exists
        let Some(ordinal) = cursor.ordinal(name) else {
            continue;
        };

        record.set(column, cursor.value(ordinal))?;
        applied += 1;
    }

    Ok(applied)
}
