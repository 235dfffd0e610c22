use crate::ids::{CharacterTemplateId, MapId, MapSpawnId};
use rowden::{define_table, value::Value};

define_table! {
    /// One row of the `map_spawn` table.
    ///
    /// The spawn rectangle is nullable column-by-column: NULL x/y/width/
    /// height means "anywhere on the map" for that axis.
    pub record MapSpawnRow("map_spawn") {
        view MapSpawnView;
        column MapSpawnColumn;
        keys {
            (Id, id, "id", MapSpawnId, "int(11)",
                nullable = false, fk = false, default = None,
                comment = "Unique ID of the spawn entry."),
        }
        data {
            (CharacterTemplateId, character_template_id, "character_template_id",
                CharacterTemplateId, "smallint(5) unsigned",
                nullable = false, fk = true, default = None,
                comment = "Template of the NPC to spawn."),
            (MapId, map_id, "map_id", MapId, "smallint(5) unsigned",
                nullable = false, fk = true, default = None,
                comment = "Map the spawning takes place on."),
            (Amount, amount, "amount", u8, "tinyint(3) unsigned",
                nullable = false, fk = false, default = Some(Value::U8(1)),
                comment = "How many NPCs the entry keeps alive."),
            (X, x, "x", Option<u16>, "smallint(5) unsigned",
                nullable = true, fk = false, default = None,
                comment = "Spawn area X; NULL for the whole map."),
            (Y, y, "y", Option<u16>, "smallint(5) unsigned",
                nullable = true, fk = false, default = None,
                comment = "Spawn area Y; NULL for the whole map."),
            (Width, width, "width", Option<u16>, "smallint(5) unsigned",
                nullable = true, fk = false, default = None,
                comment = "Spawn area width; NULL for the whole map."),
            (Height, height, "height", Option<u16>, "smallint(5) unsigned",
                nullable = true, fk = false, default = None,
                comment = "Spawn area height; NULL for the whole map."),
        }
    }
}
