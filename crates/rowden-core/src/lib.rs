//! Core engine for rowden: the value model, column metadata, record and
//! collaborator traits, reader/writer bindings, and the declarative
//! schema macros that expand one table declaration into all of the
//! above.
//!
//! Records are plain mutable value holders with no internal
//! synchronization; the model assumes one record is built, used, and
//! discarded within one logical operation. The only process-wide shared
//! state is the set of memoized schema statics (column lists, metadata,
//! group column names), each built once and read-only thereafter.

#[macro_use]
mod macros;

pub mod binding;
pub mod error;
pub mod group;
pub mod metadata;
pub mod table;
pub mod validate;
pub mod value;

///
/// Prelude
///
/// Domain vocabulary only; bindings and collaborators are imported from
/// their modules.
///

pub mod prelude {
    pub use crate::{
        group::{ColumnGroup, GroupKey},
        metadata::ColumnMetadata,
        table::TableRecord,
        value::{FieldValue, Value, ValueTy},
    };
}
