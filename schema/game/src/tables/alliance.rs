use crate::ids::AllianceId;
use rowden::define_table;

define_table! {
    /// One row of the `alliance` table.
    pub record AllianceRow("alliance") {
        view AllianceView;
        column AllianceColumn;
        keys {
            (Id, id, "id", AllianceId, "tinyint(3) unsigned",
                nullable = false, fk = false, default = None,
                comment = "Unique ID of the alliance."),
        }
        data {
            (Name, name, "name", String, "varchar(255)",
                nullable = false, fk = false, default = None,
                comment = "Name of the alliance."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowden::table::TableRecord;

    #[test]
    fn schema_constants() {
        assert_eq!(AllianceRow::TABLE_NAME, "alliance");
        assert_eq!(AllianceRow::column_count(), 2);
        assert_eq!(AllianceRow::columns(), &["id", "name"]);
        assert_eq!(AllianceRow::key_columns(), &["id"]);
        assert_eq!(AllianceRow::non_key_columns(), &["name"]);
    }
}
