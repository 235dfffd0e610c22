//! Game-server table schemas driving the rowden engine.
//!
//! One declarative schema per table; the records, column enums,
//! metadata, and view traits are all expanded by `rowden::define_table!`.
//! Joins are the caller's business: rows reference other entities by
//! typed id value only, never by object graph.

pub mod ids;
pub mod stats;
pub mod tables;

pub use ids::*;
pub use stats::StatType;
pub use tables::*;
