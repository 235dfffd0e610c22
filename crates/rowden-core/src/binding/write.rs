use crate::{
    binding::{
        params::{Params, column_for_parameter, parameter_name},
        sink::{BindEvent, BindSink},
    },
    error::BindError,
    table::TableRecord,
};

/// Strict writer binding: drain every column into its `@name` slot.
///
/// Expects each key to already exist in the parameter set; a missing key
/// surfaces as the parameter set's own rejection.
pub fn copy_values<R: TableRecord>(record: &R, params: &mut impl Params) -> Result<(), BindError> {
    for &column in R::all_columns() {
        let key = parameter_name(R::column_name(column));
        params.set(&key, record.get(column))?;
    }

    Ok(())
}

/// Tolerant writer binding: fill only the keys actually present.
///
/// Keys without the `@` marker or without a matching schema column are
/// skipped silently; the caller owns the under-population risk. Returns
/// the number of parameters applied.
pub fn try_copy_values<R: TableRecord>(
    record: &R,
    params: &mut impl Params,
) -> Result<usize, BindError> {
    try_copy_values_with_sink(record, params, &mut ())
}

/// `try_copy_values`, reporting every skipped key to the sink.
pub fn try_copy_values_with_sink<R: TableRecord>(
    record: &R,
    params: &mut impl Params,
    sink: &mut impl BindSink,
) -> Result<usize, BindError> {
    let keys: Vec<String> = params.keys().into_iter().map(str::to_owned).collect();
    let mut applied = 0;

    for key in keys {
        let column = column_for_parameter(&key).and_then(|name| R::column_from_name(name).ok());

        let Some(column) = column else {
            sink.on_event(BindEvent::SkippedParameter {
                table: R::TABLE_NAME,
                key,
            });
            continue;
        };

        params.set(&key, record.get(column))?;
        applied += 1;
    }

    Ok(applied)
}
