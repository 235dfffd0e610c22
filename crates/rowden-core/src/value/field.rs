use crate::{
    error::ValueError,
    value::{Value, ValueTy},
};
use chrono::NaiveDateTime;

///
/// FieldValue
///
/// Conversion seam between a record field's storage type and the `Value`
/// crossing the collaborator boundary. `from_value` performs the
/// narrowing cast: exact variant, or an integer cross-narrowing with a
/// range check. Anything else is a type mismatch.
///

pub trait FieldValue: Sized {
    /// Semantic tag reported in metadata and conversion errors.
    const VALUE_TY: ValueTy;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self, ValueError>;
}

// Every integer storage width accepts any integer variant whose value
// fits; overflow is OutOfRange, cross-family is TypeMismatch.
macro_rules! integer_field_value {
    ($( $ty:ty => $variant:ident ),* $(,)?) => {$(
        impl FieldValue for $ty {
            const VALUE_TY: ValueTy = ValueTy::$variant;

            fn to_value(&self) -> Value {
                Value::$variant(*self)
            }

            fn from_value(value: Value) -> Result<Self, ValueError> {
                if let Value::$variant(v) = value {
                    return Ok(v);
                }
                let Some(wide) = value.as_int() else {
                    return Err(ValueError::TypeMismatch {
                        expected: ValueTy::$variant,
                        actual: value.ty(),
                    });
                };

                Self::try_from(wide).map_err(|_| ValueError::OutOfRange {
                    ty: ValueTy::$variant,
                    value: wide,
                })
            }
        }
    )*};
}

integer_field_value! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

macro_rules! exact_field_value {
    ($( $ty:ty => $variant:ident ),* $(,)?) => {$(
        impl FieldValue for $ty {
            const VALUE_TY: ValueTy = ValueTy::$variant;

            #[allow(clippy::clone_on_copy)]
            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }

            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(ValueError::TypeMismatch {
                        expected: ValueTy::$variant,
                        actual: other.ty(),
                    }),
                }
            }
        }
    )*};
}

exact_field_value! {
    bool => Bool,
    f32 => F32,
    String => Text,
    Vec<u8> => Blob,
    NaiveDateTime => DateTime,
}

// f64 additionally widens from F32 losslessly.
impl FieldValue for f64 {
    const VALUE_TY: ValueTy = ValueTy::F64;

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(Self::from(v)),
            other => Err(ValueError::TypeMismatch {
                expected: ValueTy::F64,
                actual: other.ty(),
            }),
        }
    }
}

// Nullable columns: `Null` round-trips to `None`, never a sentinel.
impl<T: FieldValue> FieldValue for Option<T> {
    const VALUE_TY: ValueTy = T::VALUE_TY;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        if value.is_null() {
            return Ok(None);
        }

        T::from_value(value).map(Some)
    }
}
