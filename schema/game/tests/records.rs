//! Record-surface properties shared by every table: copy independence,
//! get-after-set, unknown-column failures, and group behavior.

use chrono::NaiveDate;
use rowden::{
    error::{SchemaError, ValueError},
    group::GroupKey,
    table::TableRecord,
    value::{Value, ValueTy},
};
use rowden_game_schema::*;

fn sample(ty: ValueTy) -> Value {
    match ty {
        ValueTy::Null => Value::Null,
        ValueTy::Bool => Value::Bool(true),
        ValueTy::I8 => Value::I8(-1),
        ValueTy::I16 => Value::I16(-12),
        ValueTy::I32 => Value::I32(-1234),
        ValueTy::I64 => Value::I64(-123_456),
        ValueTy::U8 => Value::U8(3),
        ValueTy::U16 => Value::U16(300),
        ValueTy::U32 => Value::U32(70_000),
        ValueTy::U64 => Value::U64(5_000_000_000),
        ValueTy::F32 => Value::F32(1.5),
        ValueTy::F64 => Value::F64(2.25),
        ValueTy::Text => Value::Text("sample".to_string()),
        ValueTy::Blob => Value::Blob(vec![1, 2, 3]),
        ValueTy::DateTime => Value::DateTime(
            NaiveDate::from_ymd_opt(2009, 6, 1)
                .expect("valid date")
                .and_hms_opt(12, 30, 0)
                .expect("valid time"),
        ),
    }
}

fn get_after_set_per_column<R: TableRecord + Default>() {
    let mut record = R::default();

    for &column in R::all_columns() {
        let value = sample(R::column_metadata(column).semantic_ty());
        record.set(column, value.clone()).expect("set accepts its own semantic type");
        assert_eq!(
            record.get(column),
            value,
            "get after set on {}.{}",
            R::TABLE_NAME,
            R::column_name(column)
        );
    }
}

#[test]
fn get_after_set_holds_for_every_table() {
    get_after_set_per_column::<AccountRow>();
    get_after_set_per_column::<AllianceRow>();
    get_after_set_per_column::<CharacterRow>();
    get_after_set_per_column::<CharacterInventoryRow>();
    get_after_set_per_column::<ItemRow>();
    get_after_set_per_column::<LogAccountActivityRow>();
    get_after_set_per_column::<MapSpawnRow>();
}

#[test]
fn deep_copy_is_value_independent() {
    let mut character = CharacterRow {
        id: CharacterId::new(12),
        name: "Spodumine".to_string(),
        ..CharacterRow::default()
    };
    character.stats.set(StatType::Str, 15);

    let copy = CharacterView::deep_copy(&character);
    assert_eq!(copy, character);

    character.name = "Someone else".to_string();
    character.stats.set(StatType::Str, 99);

    assert_eq!(copy.name(), "Spodumine");
    assert_eq!(copy.stats(StatType::Str), 15);
}

#[test]
fn copy_values_from_leaves_no_aliasing() {
    let mut source = ItemRow {
        id: ItemId::new(8),
        name: "Club".to_string(),
        ..ItemRow::default()
    };
    source.reqstats.set(StatType::Str, 5);

    let mut copy = ItemRow::from_view(&source);
    assert_eq!(copy, source);

    copy.reqstats.set(StatType::Str, 50);
    assert_eq!(source.reqstats.get(StatType::Str), 5);
}

#[test]
fn unrecognized_column_fails_on_every_surface() {
    let mut character = CharacterRow::default();

    assert_eq!(
        character.get_by_name("no_such_column"),
        Err(SchemaError::UnknownColumn {
            table: "character",
            column: "no_such_column".to_string()
        })
    );
    assert!(matches!(
        character.set_by_name("no_such_column", Value::U8(1)),
        Err(SchemaError::UnknownColumn { .. })
    ));
    assert!(matches!(
        CharacterRow::column_metadata_by_name("no_such_column"),
        Err(SchemaError::UnknownColumn { .. })
    ));
}

#[test]
fn incompatible_value_fails_fast() {
    let mut alliance = AllianceRow::default();

    // text into a tinyint id is a contract violation, not a data condition
    let err = alliance
        .set_by_name("id", Value::Text("7".to_string()))
        .expect_err("cross-family set must fail");
    assert_eq!(
        err,
        SchemaError::Value {
            table: "alliance",
            column: "id",
            source: ValueError::TypeMismatch {
                expected: ValueTy::U8,
                actual: ValueTy::Text
            }
        }
    );

    // an integer that does not fit the storage width is out of range
    let err = alliance
        .set_by_name("id", Value::U32(1000))
        .expect_err("overflowing set must fail");
    assert!(matches!(
        err,
        SchemaError::Value {
            source: ValueError::OutOfRange { .. },
            ..
        }
    ));
}

#[test]
fn group_defaults_to_zero_and_enumerates_once_per_key() {
    let character = CharacterRow::default();

    let pairs: Vec<_> = character.stats.iter().collect();
    assert_eq!(pairs.len(), StatType::ALL.len());
    for (index, (key, value)) in pairs.iter().enumerate() {
        assert_eq!(key.ordinal(), index);
        assert_eq!(*value, 0);
    }
}

#[test]
fn group_set_then_get_for_every_key() {
    let mut character = CharacterRow::default();

    for (index, &key) in StatType::ALL.iter().enumerate() {
        let value = u16::try_from(index).expect("small index") + 10;
        character.stats.set(key, value);
        assert_eq!(character.stats.get(key), value);
    }
}

#[test]
fn positional_constructor_matches_field_assignment() {
    let row = CharacterInventoryRow::new(CharacterId::new(42), ItemId::new(7));

    let by_fields =
        CharacterInventoryRow { character_id: CharacterId::new(42), item_id: ItemId::new(7) };

    assert_eq!(row, by_fields);
}

#[test]
fn records_survive_serde() {
    let mut character = CharacterRow {
        id: CharacterId::new(12),
        name: "Spodumine".to_string(),
        x: 512.0,
        respawn_map: Some(MapId::new(2)),
        ..CharacterRow::default()
    };
    character.stats.set(StatType::Agi, 12);

    let json = serde_json::to_string(&character).expect("serializable");
    let back: CharacterRow = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, character);
}

#[test]
fn nullable_columns_default_to_none() {
    let character = CharacterRow::default();
    assert_eq!(character.respawn_map, None);
    assert_eq!(character.get_by_name("respawn_map"), Ok(Value::Null));
}
