use crate::ids::{CharacterId, ItemId};
use rowden::define_table;

define_table! {
    /// One row of the `character_inventory` junction table: the link
    /// between a character and one item instance it carries. Both
    /// columns form the key; there are no non-key columns.
    pub record CharacterInventoryRow("character_inventory") {
        view CharacterInventoryView;
        column CharacterInventoryColumn;
        keys {
            (CharacterId, character_id, "character_id", CharacterId, "int(11)",
                nullable = false, fk = true, default = None,
                comment = "Character carrying the item."),
            (ItemId, item_id, "item_id", ItemId, "int(11)",
                nullable = false, fk = true, default = None,
                comment = "Item instance being carried."),
        }
        data {}
    }
}
