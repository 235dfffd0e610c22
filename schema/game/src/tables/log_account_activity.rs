use crate::ids::AccountId;
use chrono::NaiveDateTime;
use rowden::define_table;

define_table! {
    /// One row of the `log_account_activity` table.
    ///
    /// The table carries an `id` column but declares no key columns;
    /// uniqueness is enforced by the database alone. That (possibly
    /// surprising) declaration is preserved as-is rather than promoting
    /// `id` to a key here.
    pub record LogAccountActivityRow("log_account_activity") {
        view LogAccountActivityView;
        column LogAccountActivityColumn;
        keys {}
        data {
            (Id, id, "id", u32, "int(11)",
                nullable = false, fk = false, default = None,
                comment = "Row id, assigned by the database."),
            (AccountId, account_id, "account_id", AccountId, "int(11)",
                nullable = false, fk = true, default = None,
                comment = "Account the activity belongs to."),
            (TimeLogin, time_login, "time_login", NaiveDateTime, "datetime",
                nullable = false, fk = false, default = None,
                comment = "When the session started."),
            (TimeLogout, time_logout, "time_logout", Option<NaiveDateTime>, "datetime",
                nullable = true, fk = false, default = None,
                comment = "When the session ended; NULL while still open."),
        }
    }
}
