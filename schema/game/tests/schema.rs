//! Schema introspection consistency for every declared table.

use rowden::{table::TableRecord, validate::validate, value::ValueTy};
use rowden_game_schema::*;

fn introspection_is_consistent<R: TableRecord>() {
    validate::<R>().expect(R::TABLE_NAME);

    // name-keyed and tag-keyed lookups agree for every column
    for &name in R::columns() {
        let column = R::column_from_name(name).expect(name);
        assert_eq!(R::column_name(column), name);
        assert_eq!(R::column_metadata(column).name(), name);
    }
}

#[test]
fn every_table_passes_validation() {
    introspection_is_consistent::<AccountRow>();
    introspection_is_consistent::<AllianceRow>();
    introspection_is_consistent::<CharacterRow>();
    introspection_is_consistent::<CharacterInventoryRow>();
    introspection_is_consistent::<ItemRow>();
    introspection_is_consistent::<LogAccountActivityRow>();
    introspection_is_consistent::<MapSpawnRow>();
}

#[test]
fn metadata_is_a_passive_fact_sheet() {
    let meta = CharacterRow::column_metadata_by_name("respawn_map").expect("column exists");

    assert_eq!(meta.name(), "respawn_map");
    assert_eq!(meta.database_type(), "smallint(5) unsigned");
    assert_eq!(meta.semantic_ty(), ValueTy::U16);
    assert!(meta.is_nullable());
    assert!(meta.is_foreign_key());
    assert!(!meta.is_primary_key());
    assert_eq!(meta.default_value(), None);
}

#[test]
fn defaults_surface_on_metadata() {
    let meta = CharacterRow::column_metadata_by_name("level").expect("column exists");
    assert_eq!(meta.default_value(), Some(&rowden::value::Value::U8(1)));

    let meta = ItemRow::column_metadata_by_name("amount").expect("column exists");
    assert_eq!(meta.default_value(), Some(&rowden::value::Value::U8(1)));
}

#[test]
fn key_partition_is_exact() {
    for (keys, non_keys, all) in [
        (
            CharacterRow::key_columns(),
            CharacterRow::non_key_columns(),
            CharacterRow::columns(),
        ),
        (
            CharacterInventoryRow::key_columns(),
            CharacterInventoryRow::non_key_columns(),
            CharacterInventoryRow::columns(),
        ),
        (
            LogAccountActivityRow::key_columns(),
            LogAccountActivityRow::non_key_columns(),
            LogAccountActivityRow::columns(),
        ),
    ] {
        assert_eq!(keys.len() + non_keys.len(), all.len());
        for key in keys {
            assert!(all.contains(key));
            assert!(!non_keys.contains(key));
        }
    }
}
