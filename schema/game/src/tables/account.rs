use crate::ids::AccountId;
use chrono::NaiveDateTime;
use rowden::define_table;

define_table! {
    /// One row of the `account` table.
    pub record AccountRow("account") {
        view AccountView;
        column AccountColumn;
        keys {
            (Id, id, "id", AccountId, "int(11)",
                nullable = false, fk = false, default = None,
                comment = "Unique ID of the account."),
        }
        data {
            (Name, name, "name", String, "varchar(30)",
                nullable = false, fk = false, default = None,
                comment = "Login name of the account."),
            (Password, password, "password", String, "char(32)",
                nullable = false, fk = false, default = None,
                comment = "Password hash for the account."),
            (Email, email, "email", String, "varchar(60)",
                nullable = false, fk = false, default = None,
                comment = "Contact email address."),
            (TimeCreated, time_created, "time_created", NaiveDateTime, "datetime",
                nullable = false, fk = false, default = None,
                comment = "When the account was created."),
            (TimeLastLogin, time_last_login, "time_last_login", NaiveDateTime, "datetime",
                nullable = false, fk = false, default = None,
                comment = "When the account last logged in."),
            (CurrentIp, current_ip, "current_ip", Option<u32>, "int(10) unsigned",
                nullable = true, fk = false, default = None,
                comment = "IP currently logged in from; NULL when offline."),
        }
    }
}
