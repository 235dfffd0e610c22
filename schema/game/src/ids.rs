//! Domain-narrowed identifier types.
//!
//! Each id is a distinct nominal wrapper over its storage width, so a
//! character id can never be handed to something expecting an item id.
//! Conversions go through `new`/`raw` only.

use rowden::domain_id;

domain_id! {
    /// Key of the `account` table.
    pub struct AccountId(u32)
}

domain_id! {
    /// Key of the `alliance` table. A single byte: the alliance set is
    /// tiny and referenced from many rows.
    pub struct AllianceId(u8)
}

domain_id! {
    /// Key of the `character` table.
    pub struct CharacterId(u32)
}

domain_id! {
    /// Key of the `character_template` table.
    pub struct CharacterTemplateId(u16)
}

domain_id! {
    /// Key of the `item` table.
    pub struct ItemId(u32)
}

domain_id! {
    /// Key of the `item_template` table.
    pub struct ItemTemplateId(u16)
}

domain_id! {
    /// Key of the `map` table.
    pub struct MapId(u16)
}

domain_id! {
    /// Key of the `map_spawn` table.
    pub struct MapSpawnId(u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowden::value::{FieldValue, Value};

    #[test]
    fn ids_convert_only_by_name() {
        let id = CharacterId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn ids_cross_the_value_boundary_as_their_storage_width() {
        assert_eq!(AllianceId::new(3).to_value(), Value::U8(3));
        assert_eq!(
            CharacterId::from_value(Value::U32(42)),
            Ok(CharacterId::new(42))
        );
    }
}
