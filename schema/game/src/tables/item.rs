use crate::{
    ids::{ItemId, ItemTemplateId},
    stats::StatType,
};
use rowden::{define_table, value::Value};

define_table! {
    /// One row of the `item` table.
    ///
    /// Carries two stat families: `stat_*` (granted while equipped) and
    /// `reqstat_*` (required to equip). Same key set, distinct columns.
    pub record ItemRow("item") {
        view ItemView;
        column ItemColumn;
        keys {
            (Id, id, "id", ItemId, "int(11)",
                nullable = false, fk = false, default = None,
                comment = "Unique ID of the item instance."),
        }
        data {
            (ItemTemplateId, item_template_id, "item_template_id",
                Option<ItemTemplateId>, "smallint(5) unsigned",
                nullable = true, fk = true, default = None,
                comment = "Template the item was created from, if any."),
            (Name, name, "name", String, "varchar(255)",
                nullable = false, fk = false, default = None,
                comment = "Name of the item."),
            (Description, description, "description", String, "varchar(255)",
                nullable = false, fk = false, default = None,
                comment = "Description shown to players."),
            (Graphic, graphic, "graphic", u16, "smallint(5) unsigned",
                nullable = false, fk = false, default = Some(Value::U16(0)),
                comment = "Sprite used to draw the item."),
            (Value, value, "value", i32, "int(11)",
                nullable = false, fk = false, default = Some(Value::I32(0)),
                comment = "Base monetary value."),
            (Amount, amount, "amount", u8, "tinyint(3) unsigned",
                nullable = false, fk = false, default = Some(Value::U8(1)),
                comment = "Stack size of this instance."),
            (Width, width, "width", u8, "tinyint(3) unsigned",
                nullable = false, fk = false, default = Some(Value::U8(16)),
                comment = "Width in pixels when on a map."),
            (Height, height, "height", u8, "tinyint(3) unsigned",
                nullable = false, fk = false, default = Some(Value::U8(16)),
                comment = "Height in pixels when on a map."),
            (Hp, hp, "hp", i16, "smallint(6)",
                nullable = false, fk = false, default = Some(Value::I16(0)),
                comment = "Health restored when used."),
            (Mp, mp, "mp", i16, "smallint(6)",
                nullable = false, fk = false, default = Some(Value::I16(0)),
                comment = "Mana restored when used."),
        }
        groups {
            (Stat, stats, StatType, u16, "stat_", "smallint(5) unsigned",
                comment = "Stat granted while the item is equipped."),
            (ReqStat, reqstats, StatType, u8, "reqstat_", "tinyint(3) unsigned",
                comment = "Stat required to equip the item."),
        }
    }
}
