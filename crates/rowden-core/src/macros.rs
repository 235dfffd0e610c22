//! Declarative schema macros.
//!
//! One generic engine, driven by per-table registry entries: every column
//! row lists every attribute in the same order, and the expansion wires
//! the record, its closed column enum, metadata statics, and the
//! read-only view trait through the engine traits.

/// Nominal identifier newtype over an integer storage primitive.
///
/// Conversion to and from the storage type goes through the named
/// `new`/`raw` pair only; there is no implicit numeric coercion, so ids
/// of different entities cannot be mixed up at compile time.
#[macro_export]
macro_rules! domain_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($repr:ty)) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            ::derive_more::Display,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $name($repr);

        impl $name {
            #[must_use]
            $vis const fn new(raw: $repr) -> Self {
                Self(raw)
            }

            #[must_use]
            $vis const fn raw(self) -> $repr {
                self.0
            }
        }

        impl $crate::value::FieldValue for $name {
            const VALUE_TY: $crate::value::ValueTy =
                <$repr as $crate::value::FieldValue>::VALUE_TY;

            fn to_value(&self) -> $crate::value::Value {
                <$repr as $crate::value::FieldValue>::to_value(&self.0)
            }

            fn from_value(value: $crate::value::Value) -> Result<Self, $crate::error::ValueError> {
                <$repr as $crate::value::FieldValue>::from_value(value).map(Self)
            }
        }
    };
}

/// Closed key enumeration for a column group.
///
/// Variants are listed in column order; `ordinal` is dense by
/// construction, which is what keeps `ColumnGroup` indexing safe.
#[macro_export]
macro_rules! group_key {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => $key_name:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
            Eq,
            Hash,
            PartialEq,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        $vis enum $name {
            $( $variant ),+
        }

        impl $crate::group::GroupKey for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $key_name ),+
                }
            }

            fn ordinal(self) -> usize {
                self as usize
            }
        }
    };
}

/// Expand one table's declarative schema into its record, column enum,
/// metadata, view trait, and `TableRecord` wiring.
///
/// Column rows are uniform: `(Variant, field, "column", Type, "db type",
/// nullable = …, fk = …, default = …, comment = "…")`. Rows under
/// `keys` become the declared primary key (the list may be empty — some
/// tables declare none and that is preserved); rows under `data` are the
/// non-key columns. An optional `groups` section maps a family of
/// same-shaped columns onto one `ColumnGroup` field, one column per key
/// of the group's enumeration.
#[macro_export]
macro_rules! define_table {
    (
        $(#[$meta:meta])*
        $vis:vis record $record:ident ($table:literal) {
            view $view:ident;
            column $column:ident;
            keys {
                $( ($kvariant:ident, $kfield:ident, $kname:literal, $kty:ty, $kdb:literal,
                    nullable = $knull:literal, fk = $kfk:literal,
                    default = $kdefault:expr, comment = $kcomment:literal) ),*
                $(,)?
            }
            data {
                $( ($dvariant:ident, $dfield:ident, $dname:literal, $dty:ty, $ddb:literal,
                    nullable = $dnull:literal, fk = $dfk:literal,
                    default = $ddefault:expr, comment = $dcomment:literal) ),*
                $(,)?
            }
            $(
                groups {
                    $( ($gvariant:ident, $gfield:ident, $gkey:ty, $gvalue:ty,
                        $gprefix:literal, $gdb:literal, comment = $gcomment:literal) ),+
                    $(,)?
                }
            )?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $record {
            $( pub $kfield: $kty, )*
            $( pub $dfield: $dty, )*
            $($( pub $gfield: $crate::group::ColumnGroup<$gkey, $gvalue>, )+)?
        }

        impl $record {
            /// Positional constructor, one argument per field in declared
            /// order (group containers last).
            #[allow(clippy::too_many_arguments)]
            #[must_use]
            $vis fn new(
                $( $kfield: $kty, )*
                $( $dfield: $dty, )*
                $($( $gfield: $crate::group::ColumnGroup<$gkey, $gvalue>, )+)?
            ) -> Self {
                Self {
                    $( $kfield, )*
                    $( $dfield, )*
                    $($( $gfield, )+)?
                }
            }

            /// Hydrate a fresh record from a positioned row cursor via the
            /// strict reader binding.
            $vis fn from_cursor(
                cursor: &impl $crate::binding::RowCursor,
            ) -> Result<Self, $crate::error::BindError> {
                let mut record = Self::default();
                $crate::binding::read_values(cursor, &mut record)?;

                Ok(record)
            }

            /// Deep value copy from any conforming read-only view.
            #[must_use]
            $vis fn from_view(source: &impl $view) -> Self {
                let mut record = Self::default();
                record.copy_values_from(source);

                record
            }

            /// Overwrite every field from the source view. No shared
            /// mutable state with the source afterwards.
            #[allow(unused_variables)]
            $vis fn copy_values_from(&mut self, source: &impl $view) {
                $( self.$kfield = source.$kfield(); )*
                $( self.$dfield = source.$dfield(); )*
                $($(
                    for key in <$gkey as $crate::group::GroupKey>::ALL {
                        self.$gfield.set(*key, source.$gfield(*key));
                    }
                )+)?
            }
        }

        ///
        /// Read-only capability over one row of this table. Implemented by
        /// the record itself and by any other conforming source.
        ///
        #[allow(clippy::clone_on_copy)]
        $vis trait $view {
            $( fn $kfield(&self) -> $kty; )*
            $( fn $dfield(&self) -> $dty; )*
            $($( fn $gfield(&self, key: $gkey) -> $gvalue; )+)?

            #[must_use]
            fn deep_copy(&self) -> $record;
        }

        #[allow(clippy::clone_on_copy)]
        impl $view for $record {
            $( fn $kfield(&self) -> $kty { self.$kfield.clone() } )*
            $( fn $dfield(&self) -> $dty { self.$dfield.clone() } )*
            $($( fn $gfield(&self, key: $gkey) -> $gvalue { self.$gfield.get(key) } )+)?

            fn deep_copy(&self) -> $record {
                self.clone()
            }
        }

        ///
        /// Closed column tag for this table. Group columns carry their key.
        ///
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        $vis enum $column {
            $( $kvariant, )*
            $( $dvariant, )*
            $($( $gvariant($gkey), )+)?
        }

        impl $crate::table::TableRecord for $record {
            const TABLE_NAME: &'static str = $table;

            type Column = $column;

            fn columns() -> &'static [&'static str] {
                static COLUMNS: ::std::sync::LazyLock<Vec<&'static str>> =
                    ::std::sync::LazyLock::new(|| {
                        <$record as $crate::table::TableRecord>::all_columns()
                            .iter()
                            .map(|&c| <$record as $crate::table::TableRecord>::column_name(c))
                            .collect()
                    });

                &COLUMNS
            }

            fn key_columns() -> &'static [&'static str] {
                &[ $( $kname ),* ]
            }

            fn non_key_columns() -> &'static [&'static str] {
                static NON_KEY: ::std::sync::LazyLock<Vec<&'static str>> =
                    ::std::sync::LazyLock::new(|| {
                        #[allow(unused_mut)]
                        let mut names: Vec<&'static str> = vec![ $( $dname ),* ];
                        $($(
                            names.extend(
                                $crate::group::group_column_names::<$gkey>($gprefix)
                                    .iter()
                                    .copied(),
                            );
                        )+)?

                        names
                    });

                &NON_KEY
            }

            fn all_columns() -> &'static [$column] {
                static ALL: ::std::sync::LazyLock<Vec<$column>> =
                    ::std::sync::LazyLock::new(|| {
                        #[allow(unused_mut)]
                        let mut all = vec![
                            $( $column::$kvariant, )*
                            $( $column::$dvariant, )*
                        ];
                        $($(
                            all.extend(
                                <$gkey as $crate::group::GroupKey>::ALL
                                    .iter()
                                    .copied()
                                    .map($column::$gvariant),
                            );
                        )+)?

                        all
                    });

                &ALL
            }

            fn column_from_name(name: &str) -> Result<$column, $crate::error::SchemaError> {
                match name {
                    $( $kname => Ok($column::$kvariant), )*
                    $( $dname => Ok($column::$dvariant), )*
                    _ => {
                        $($(
                            if let Some(bare) = name.strip_prefix($gprefix) {
                                let key = <$gkey as $crate::group::GroupKey>::ALL
                                    .iter()
                                    .copied()
                                    .find(|k| $crate::group::GroupKey::name(*k) == bare);
                                if let Some(key) = key {
                                    return Ok($column::$gvariant(key));
                                }
                            }
                        )+)?

                        Err($crate::error::SchemaError::unknown_column($table, name))
                    }
                }
            }

            fn column_name(column: $column) -> &'static str {
                match column {
                    $( $column::$kvariant => $kname, )*
                    $( $column::$dvariant => $dname, )*
                    $($(
                        $column::$gvariant(key) => {
                            $crate::group::group_column_name::<$gkey>($gprefix, key)
                        }
                    )+)?
                }
            }

            fn column_metadata(column: $column) -> &'static $crate::metadata::ColumnMetadata {
                static META: ::std::sync::LazyLock<Vec<$crate::metadata::ColumnMetadata>> =
                    ::std::sync::LazyLock::new(|| {
                        #[allow(unused_mut)]
                        let mut meta = vec![
                            $(
                                $crate::metadata::ColumnMetadata::new(
                                    $kname,
                                    $kcomment,
                                    $kdb,
                                    $kdefault,
                                    <$kty as $crate::value::FieldValue>::VALUE_TY,
                                    $knull,
                                    true,
                                    $kfk,
                                ),
                            )*
                            $(
                                $crate::metadata::ColumnMetadata::new(
                                    $dname,
                                    $dcomment,
                                    $ddb,
                                    $ddefault,
                                    <$dty as $crate::value::FieldValue>::VALUE_TY,
                                    $dnull,
                                    false,
                                    $dfk,
                                ),
                            )*
                        ];
                        $($(
                            meta.extend(<$gkey as $crate::group::GroupKey>::ALL.iter().map(|&key| {
                                $crate::metadata::ColumnMetadata::new(
                                    $crate::group::group_column_name::<$gkey>($gprefix, key),
                                    $gcomment,
                                    $gdb,
                                    Some($crate::value::FieldValue::to_value(
                                        &<$gvalue>::default(),
                                    )),
                                    <$gvalue as $crate::value::FieldValue>::VALUE_TY,
                                    false,
                                    false,
                                    false,
                                )
                            }));
                        )+)?

                        meta
                    });

                let position = <$record as $crate::table::TableRecord>::all_columns()
                    .iter()
                    .position(|&c| c == column);

                match position {
                    Some(index) => &META[index],
                    // the tag set and the metadata list are built from the
                    // same entries
                    None => unreachable!("column tag outside the closed set"),
                }
            }

            fn get(&self, column: $column) -> $crate::value::Value {
                match column {
                    $(
                        $column::$kvariant => {
                            $crate::value::FieldValue::to_value(&self.$kfield)
                        }
                    )*
                    $(
                        $column::$dvariant => {
                            $crate::value::FieldValue::to_value(&self.$dfield)
                        }
                    )*
                    $($(
                        $column::$gvariant(key) => {
                            $crate::value::FieldValue::to_value(&self.$gfield.get(key))
                        }
                    )+)?
                }
            }

            fn set(
                &mut self,
                column: $column,
                value: $crate::value::Value,
            ) -> Result<(), $crate::error::SchemaError> {
                match column {
                    $(
                        $column::$kvariant => {
                            self.$kfield = $crate::value::FieldValue::from_value(value)
                                .map_err(|source| $crate::error::SchemaError::Value {
                                    table: $table,
                                    column: $kname,
                                    source,
                                })?;
                        }
                    )*
                    $(
                        $column::$dvariant => {
                            self.$dfield = $crate::value::FieldValue::from_value(value)
                                .map_err(|source| $crate::error::SchemaError::Value {
                                    table: $table,
                                    column: $dname,
                                    source,
                                })?;
                        }
                    )*
                    $($(
                        $column::$gvariant(key) => {
                            let narrowed = <$gvalue as $crate::value::FieldValue>::from_value(value)
                                .map_err(|source| $crate::error::SchemaError::Value {
                                    table: $table,
                                    column: $crate::group::group_column_name::<$gkey>(
                                        $gprefix, key,
                                    ),
                                    source,
                                })?;
                            self.$gfield.set(key, narrowed);
                        }
                    )+)?
                }

                Ok(())
            }
        }
    };
}
