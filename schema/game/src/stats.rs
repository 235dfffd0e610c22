//! The stat column family.
//!
//! Character and item rows each carry one column per stat type. The
//! records expose them as a single keyed collection (`ColumnGroup`)
//! rather than one field per column; `StatType` is the closed key set.

use rowden::group_key;

group_key! {
    /// Every stat a character or item can carry, in column order.
    pub enum StatType {
        Agi => "agi",
        Def => "def",
        Int => "int",
        MaxHit => "maxhit",
        MaxHp => "maxhp",
        MaxMp => "maxmp",
        MinHit => "minhit",
        Str => "str",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowden::group::GroupKey;

    #[test]
    fn stat_keys_are_dense_and_ordered() {
        assert_eq!(StatType::ALL.len(), 8);
        for (index, key) in StatType::ALL.iter().enumerate() {
            assert_eq!(key.ordinal(), index);
        }
    }

    #[test]
    fn stat_key_names_are_bare() {
        assert_eq!(StatType::Agi.name(), "agi");
        assert_eq!(StatType::MaxHp.name(), "maxhp");
    }
}
