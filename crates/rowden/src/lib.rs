//! rowden — a schema-driven typed table-record layer for relational
//! game data.
//!
//! This is the public meta-crate. Downstream users depend on **rowden**
//! only; it re-exports the stable API from `rowden-core`:
//!   - the value model and column metadata
//!   - the `TableRecord` engine seam and validation pass
//!   - reader/writer bindings and their collaborator traits
//!   - the declarative `define_table!` / `domain_id!` / `group_key!`
//!     macros that expand per-table schemas into all of the above

pub use rowden_core as core;

pub use rowden_core::{binding, error, group, metadata, table, validate, value};

//
// Macros
//

pub use rowden_core::{define_table, domain_id, group_key};

//
// Prelude
//

pub mod prelude {
    pub use rowden_core::prelude::*;
}
