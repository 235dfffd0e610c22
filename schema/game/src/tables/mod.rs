//! Declarative table schemas. One `define_table!` invocation per table;
//! the engine in `rowden-core` supplies all behavior.

mod account;
mod alliance;
mod character;
mod character_inventory;
mod item;
mod log_account_activity;
mod map_spawn;

// re-exports
pub use account::{AccountColumn, AccountRow, AccountView};
pub use alliance::{AllianceColumn, AllianceRow, AllianceView};
pub use character::{CharacterColumn, CharacterRow, CharacterView};
pub use character_inventory::{
    CharacterInventoryColumn, CharacterInventoryRow, CharacterInventoryView,
};
pub use item::{ItemColumn, ItemRow, ItemView};
pub use log_account_activity::{
    LogAccountActivityColumn, LogAccountActivityRow, LogAccountActivityView,
};
pub use map_spawn::{MapSpawnColumn, MapSpawnRow, MapSpawnView};
