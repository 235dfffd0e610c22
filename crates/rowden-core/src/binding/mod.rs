//! Reader/writer bindings: value transfer between table records and the
//! external row-cursor / parameter-set collaborators.
//!
//! Strict variants require full schema/collaborator alignment and fail
//! fast otherwise. Tolerant (`try_*`) variants skip unmatched columns and
//! keys silently; callers must not assume full hydration after one.

mod cursor;
mod memory;
mod params;
mod read;
mod sink;
mod write;

// re-exports
pub use cursor::RowCursor;
pub use memory::{MemoryParams, MemoryRow};
pub use params::{Params, column_for_parameter, parameter_name};
pub use read::{read_values, try_read_values, try_read_values_with_sink};
pub use sink::{BindEvent, BindSink, RecordingSink};
pub use write::{copy_values, try_copy_values, try_copy_values_with_sink};
