use crate::{error::ValidateError, table::TableRecord};

/// Check a table's declared schema constants against each other.
///
/// The lists a table exposes for introspection must stay mutually
/// consistent: unique column names, key ∪ non-key = all columns with no
/// overlap, tag list aligned with the name list, and per-column metadata
/// agreeing on name and key role. An empty key list is legal.
pub fn validate<R: TableRecord>() -> Result<(), ValidateError> {
    let columns = R::columns();

    for (index, column) in columns.iter().enumerate() {
        if columns[..index].contains(column) {
            return Err(ValidateError::DuplicateColumn {
                table: R::TABLE_NAME,
                column,
            });
        }
    }

    let keys = R::key_columns();
    let non_keys = R::non_key_columns();

    let partitioned = keys.len() + non_keys.len() == columns.len()
        && keys.iter().all(|k| columns.contains(k) && !non_keys.contains(k))
        && non_keys.iter().all(|n| columns.contains(n));

    if !partitioned {
        return Err(ValidateError::BrokenPartition {
            table: R::TABLE_NAME,
        });
    }

    let all = R::all_columns();
    if all.len() != columns.len() {
        return Err(ValidateError::BrokenPartition {
            table: R::TABLE_NAME,
        });
    }

    for (&column, &name) in all.iter().zip(columns) {
        if R::column_name(column) != name {
            return Err(ValidateError::MetadataMismatch {
                table: R::TABLE_NAME,
                column: name,
                detail: "tag list out of step with the name list".to_string(),
            });
        }

        let meta = R::column_metadata(column);
        if meta.name() != name {
            return Err(ValidateError::MetadataMismatch {
                table: R::TABLE_NAME,
                column: name,
                detail: format!("metadata carries name `{}`", meta.name()),
            });
        }

        if meta.is_primary_key() != keys.contains(&name) {
            return Err(ValidateError::MetadataMismatch {
                table: R::TABLE_NAME,
                column: name,
                detail: "primary-key flag disagrees with the key list".to_string(),
            });
        }
    }

    Ok(())
}
