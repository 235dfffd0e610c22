//! Reader/writer binding properties: strict round-trips, tolerant
//! partial projections, and the parameter-set contract.

use rowden::{
    binding::{
        BindEvent, MemoryParams, MemoryRow, RecordingSink, RowCursor, copy_values, read_values,
        try_copy_values, try_read_values, try_read_values_with_sink,
    },
    error::BindError,
    table::TableRecord,
    value::Value,
};
use rowden_game_schema::*;

fn sample_character() -> CharacterRow {
    let mut character = CharacterRow {
        id: CharacterId::new(12),
        account_id: Some(AccountId::new(3)),
        name: "Spodumine".to_string(),
        map_id: MapId::new(2),
        x: 512.0,
        y: 1024.0,
        level: 9,
        exp: 1200,
        hp: 40,
        mp: 25,
        respawn_map: None,
        ..CharacterRow::default()
    };
    character.stats.set(StatType::Agi, 12);
    character.stats.set(StatType::Str, 15);

    character
}

#[test]
fn strict_write_then_read_round_trips() {
    let original = sample_character();

    let mut params = MemoryParams::for_table::<CharacterRow>();
    copy_values(&original, &mut params).expect("full parameter set");

    // every column must have been assigned
    assert_eq!(params.to_row().column_names().len(), CharacterRow::column_count());

    let hydrated = CharacterRow::from_cursor(&params.to_row()).expect("full projection");
    assert_eq!(hydrated, original);

    // the nullable respawn map came back as no-value, not a sentinel
    assert_eq!(hydrated.respawn_map, None);
}

#[test]
fn junction_row_writes_its_two_parameters() {
    let link = CharacterInventoryRow::new(CharacterId::new(42), ItemId::new(7));

    let mut params = MemoryParams::new()
        .with_key("@character_id")
        .with_key("@item_id");
    copy_values(&link, &mut params).expect("both keys pre-seeded");

    assert_eq!(params.get("@character_id"), Some(&Value::U32(42)));
    assert_eq!(params.get("@item_id"), Some(&Value::U32(7)));
}

#[test]
fn strict_writer_rejects_an_unseeded_key() {
    let link = CharacterInventoryRow::new(CharacterId::new(42), ItemId::new(7));

    let mut params = MemoryParams::new().with_key("@character_id");
    let err = copy_values(&link, &mut params).expect_err("item_id key missing");
    assert_eq!(
        err,
        BindError::MissingParameter {
            key: "@item_id".to_string()
        }
    );
}

#[test]
fn strict_reader_rejects_a_missing_column() {
    let row = MemoryRow::new()
        .with("id", Value::U8(1))
        .with("no_name_column", Value::Text("x".to_string()));

    let err = AllianceRow::from_cursor(&row).expect_err("name column missing");
    assert_eq!(
        err,
        BindError::MissingColumn {
            table: "alliance",
            column: "name"
        }
    );
}

#[test]
fn tolerant_read_populates_exactly_the_present_subset() {
    let row = MemoryRow::new()
        .with("id", Value::U32(12))
        .with("name", Value::Text("Spodumine".to_string()));

    // pre-call value must survive
    let mut character = CharacterRow { level: 42, ..CharacterRow::default() };

    let applied = try_read_values(&row, &mut character).expect("no type conflicts");
    assert_eq!(applied, 2);
    assert_eq!(character.id, CharacterId::new(12));
    assert_eq!(character.name, "Spodumine");
    assert_eq!(character.level, 42);
}

#[test]
fn tolerant_read_skips_unknown_columns_and_reports_them() {
    let row = MemoryRow::new()
        .with("id", Value::U32(12))
        .with("rank", Value::U8(1));

    let mut character = CharacterRow::default();
    let mut sink = RecordingSink::default();
    let applied =
        try_read_values_with_sink(&row, &mut character, &mut sink).expect("no type conflicts");

    assert_eq!(applied, 1);
    assert_eq!(
        sink.events,
        vec![BindEvent::SkippedColumn {
            table: "character",
            column: "rank".to_string()
        }]
    );
}

#[test]
fn tolerant_read_still_fails_fast_on_bad_types() {
    let row = MemoryRow::new().with("id", Value::Text("twelve".to_string()));

    let mut character = CharacterRow::default();
    assert!(try_read_values(&row, &mut character).is_err());
}

#[test]
fn tolerant_write_fills_only_present_keys() {
    let original = sample_character();

    let mut params = MemoryParams::new()
        .with_key("@id")
        .with_key("@name")
        .with_key("@unrelated");
    let applied = try_copy_values(&original, &mut params).expect("no failures");

    assert_eq!(applied, 2);
    assert_eq!(params.get("@id"), Some(&Value::U32(12)));
    assert_eq!(
        params.get("@name"),
        Some(&Value::Text("Spodumine".to_string()))
    );
    assert_eq!(params.get("@unrelated"), None);
}

#[test]
fn stat_columns_travel_like_any_other_column() {
    let original = sample_character();

    let row = MemoryRow::from_record(&original);
    let mut hydrated = CharacterRow::default();
    read_values(&row, &mut hydrated).expect("full projection");

    assert_eq!(hydrated.stats.get(StatType::Agi), 12);
    assert_eq!(hydrated.stats.get(StatType::Str), 15);
    assert_eq!(hydrated.stats.get(StatType::Def), 0);
}
