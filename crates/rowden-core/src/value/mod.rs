mod field;


use chrono::NaiveDateTime;
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::fmt;

// re-exports
pub use field::FieldValue;

///
/// ValueTy
///
/// Tag for one storage-primitive shape. Used as the semantic type on
/// column metadata and in conversion errors.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum ValueTy {
    Blob,
    Bool,
    DateTime,
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    Null,
    Text,
    U8,
    U16,
    U32,
    U64,
}

///
/// Value
///
/// The storage-primitive sum type crossing the row-cursor and
/// parameter-set boundary. `Null` is the SQL null marker; nullable
/// columns surface it as `Option::None` on the record side.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Text(String),
    Blob(Vec<u8>),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Tag of this value's variant.
    #[must_use]
    pub const fn ty(&self) -> ValueTy {
        match self {
            Self::Null => ValueTy::Null,
            Self::Bool(_) => ValueTy::Bool,
            Self::I8(_) => ValueTy::I8,
            Self::I16(_) => ValueTy::I16,
            Self::I32(_) => ValueTy::I32,
            Self::I64(_) => ValueTy::I64,
            Self::U8(_) => ValueTy::U8,
            Self::U16(_) => ValueTy::U16,
            Self::U32(_) => ValueTy::U32,
            Self::U64(_) => ValueTy::U64,
            Self::F32(_) => ValueTy::F32,
            Self::F64(_) => ValueTy::F64,
            Self::Text(_) => ValueTy::Text,
            Self::Blob(_) => ValueTy::Blob,
            Self::DateTime(_) => ValueTy::DateTime,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Widen any integer variant to i128. `None` for every other variant;
    /// cross-family coercion is not supported.
    #[must_use]
    pub const fn as_int(&self) -> Option<i128> {
        match *self {
            Self::I8(v) => Some(v as i128),
            Self::I16(v) => Some(v as i128),
            Self::I32(v) => Some(v as i128),
            Self::I64(v) => Some(v as i128),
            Self::U8(v) => Some(v as i128),
            Self::U16(v) => Some(v as i128),
            Self::U32(v) => Some(v as i128),
            Self::U64(v) => Some(v as i128),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
            Self::Blob(v) => write!(f, "<{} bytes>", v.len()),
            Self::DateTime(v) => write!(f, "{v}"),
        }
    }
}
