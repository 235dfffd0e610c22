use crate::value::{Value, ValueTy};
use serde::Serialize;

///
/// ColumnMetadata
///
/// Immutable descriptor for one database column: a passive fact sheet,
/// not a validator. One instance exists per (table, column) pair,
/// materialized once in the table's metadata static.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnMetadata {
    name: &'static str,
    comment: &'static str,
    database_type: &'static str,
    default_value: Option<Value>,
    semantic_ty: ValueTy,
    nullable: bool,
    primary_key: bool,
    foreign_key: bool,
}

impl ColumnMetadata {
    #[allow(clippy::fn_params_excessive_bools)]
    #[must_use]
    pub const fn new(
        name: &'static str,
        comment: &'static str,
        database_type: &'static str,
        default_value: Option<Value>,
        semantic_ty: ValueTy,
        nullable: bool,
        primary_key: bool,
        foreign_key: bool,
    ) -> Self {
        Self {
            name,
            comment,
            database_type,
            default_value,
            semantic_ty,
            nullable,
            primary_key,
            foreign_key,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn comment(&self) -> &'static str {
        self.comment
    }

    /// Raw engine type, e.g. `int(11)` or `varchar(30)`.
    #[must_use]
    pub const fn database_type(&self) -> &'static str {
        self.database_type
    }

    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    #[must_use]
    pub const fn semantic_ty(&self) -> ValueTy {
        self.semantic_ty
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[must_use]
    pub const fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    #[must_use]
    pub const fn is_foreign_key(&self) -> bool {
        self.foreign_key
    }
}
