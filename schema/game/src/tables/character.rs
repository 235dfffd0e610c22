use crate::{
    ids::{AccountId, CharacterId, CharacterTemplateId, MapId},
    stats::StatType,
};
use rowden::{define_table, value::Value};

define_table! {
    /// One row of the `character` table.
    ///
    /// Respawn columns are nullable: a character with no respawn point
    /// round-trips as NULL, never a sentinel zero. Per-stat values live
    /// in the `stat_*` column family, exposed through the `stats` group.
    pub record CharacterRow("character") {
        view CharacterView;
        column CharacterColumn;
        keys {
            (Id, id, "id", CharacterId, "int(11)",
                nullable = false, fk = false, default = None,
                comment = "Unique ID of the character."),
        }
        data {
            (AccountId, account_id, "account_id", Option<AccountId>, "int(11)",
                nullable = true, fk = true, default = None,
                comment = "Account the character belongs to; NULL for NPCs."),
            (CharacterTemplateId, character_template_id, "character_template_id",
                Option<CharacterTemplateId>, "smallint(5) unsigned",
                nullable = true, fk = true, default = None,
                comment = "Template the character was created from, if any."),
            (Name, name, "name", String, "varchar(30)",
                nullable = false, fk = false, default = None,
                comment = "Name of the character."),
            (MapId, map_id, "map_id", MapId, "smallint(5) unsigned",
                nullable = false, fk = true, default = Some(Value::U16(1)),
                comment = "Map the character is currently on."),
            (X, x, "x", f32, "float",
                nullable = false, fk = false, default = Some(Value::F32(100.0)),
                comment = "World position X coordinate."),
            (Y, y, "y", f32, "float",
                nullable = false, fk = false, default = Some(Value::F32(100.0)),
                comment = "World position Y coordinate."),
            (BodyId, body_id, "body_id", u16, "smallint(5) unsigned",
                nullable = false, fk = false, default = Some(Value::U16(1)),
                comment = "Body sprite set used to draw the character."),
            (Level, level, "level", u8, "tinyint(3) unsigned",
                nullable = false, fk = false, default = Some(Value::U8(1)),
                comment = "Current level."),
            (Exp, exp, "exp", u32, "int(10) unsigned",
                nullable = false, fk = false, default = Some(Value::U32(0)),
                comment = "Experience points earned."),
            (StatPoints, statpoints, "statpoints", u32, "int(10) unsigned",
                nullable = false, fk = false, default = Some(Value::U32(0)),
                comment = "Stat points available to spend."),
            (Cash, cash, "cash", u32, "int(10) unsigned",
                nullable = false, fk = false, default = Some(Value::U32(0)),
                comment = "Cash on hand."),
            (Hp, hp, "hp", i16, "smallint(6)",
                nullable = false, fk = false, default = Some(Value::I16(50)),
                comment = "Current health points."),
            (Mp, mp, "mp", i16, "smallint(6)",
                nullable = false, fk = false, default = Some(Value::I16(50)),
                comment = "Current mana points."),
            (RespawnMap, respawn_map, "respawn_map", Option<MapId>, "smallint(5) unsigned",
                nullable = true, fk = true, default = None,
                comment = "Map the character respawns on; NULL for no respawn point."),
            (RespawnX, respawn_x, "respawn_x", f32, "float",
                nullable = false, fk = false, default = Some(Value::F32(0.0)),
                comment = "Respawn position X coordinate."),
            (RespawnY, respawn_y, "respawn_y", f32, "float",
                nullable = false, fk = false, default = Some(Value::F32(0.0)),
                comment = "Respawn position Y coordinate."),
        }
        groups {
            (Stat, stats, StatType, u16, "stat_", "smallint(5) unsigned",
                comment = "Base value for one stat of the character."),
        }
    }
}
