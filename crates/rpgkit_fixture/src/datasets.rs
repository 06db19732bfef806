//! Embedded RPG sample datasets.

use rpgkit_io_xlsx::{SpecTable, cells};

use crate::spec::SpecDataset;

/// Keys of the embedded datasets, in generation order.
pub const TUP_DATASET_KEYS: [&str; 5] = ["characters", "items", "skills", "monsters", "quests"];

/// All embedded datasets, in generation order.
pub fn datasets() -> Vec<SpecDataset> {
    vec![
        dataset_characters(),
        dataset_items(),
        dataset_skills(),
        dataset_monsters(),
        dataset_quests(),
    ]
}

/// Look up one embedded dataset by key.
pub fn dataset(key: &str) -> Option<SpecDataset> {
    match key {
        "characters" => Some(dataset_characters()),
        "items" => Some(dataset_items()),
        "skills" => Some(dataset_skills()),
        "monsters" => Some(dataset_monsters()),
        "quests" => Some(dataset_quests()),
        _ => None,
    }
}

pub fn dataset_characters() -> SpecDataset {
    let characters = SpecTable::new(
        "Characters",
        cells![
            "ID", "Name", "JobClass", "Level", "HP", "MP", "Strength", "Agility",
            "Intelligence", "Luck", "Weapon", "Armor"
        ],
    )
    .with_rows(vec![
        cells![1, "Aragorn", "Warrior", 25, 350, 50, 85, 70, 45, 60, "Legendary Sword", "Plate Mail"],
        cells![2, "Gandalf", "Wizard", 99, 200, 500, 30, 40, 95, 80, "Staff of Power", "Wizard Robe"],
        cells![3, "Legolas", "Archer", 20, 280, 80, 60, 95, 55, 75, "Elven Bow", "Leather Armor"],
        cells![4, "Gimli", "Dwarf Fighter", 18, 320, 30, 80, 50, 35, 55, "Battle Axe", "Chain Mail"],
        cells![5, "Frodo", "Hobbit", 5, 150, 40, 25, 85, 60, 90, "Sting", "Mithril Shirt"],
        cells![6, "Merlin", "Archmage", 75, 180, 600, 35, 45, 99, 85, "Ancient Staff", "Arcane Robes"],
        cells![7, "Robin Hood", "Ranger", 22, 260, 90, 55, 90, 65, 70, "Longbow", "Studded Leather"],
        cells![8, "Conan", "Barbarian", 30, 400, 20, 90, 65, 40, 50, "Broadsword", "Barbarian Leather"],
    ]);

    SpecDataset::new("characters", "characters.xlsx", vec![characters])
}

pub fn dataset_items() -> SpecDataset {
    let weapons = SpecTable::new(
        "Weapons",
        cells![
            "ID", "Name", "WeaponType", "Damage", "Durability", "Weight", "Value", "Rarity",
            "Requirements"
        ],
    )
    .with_rows(vec![
        cells![1, "Iron Sword", "Sword", 25, 100, 3.5, 150, "Common", "Str 15"],
        cells![2, "Steel Bow", "Bow", 30, 80, 2.0, 200, "Common", "Agi 20"],
        cells![3, "Flame Staff", "Staff", 40, 60, 1.5, 500, "Rare", "Int 25"],
        cells![4, "Mythril Blade", "Sword", 55, 150, 3.0, 1200, "Epic", "Str 30"],
        cells![5, "Shadow Dagger", "Dagger", 35, 90, 1.0, 800, "Rare", "Agi 25"],
        cells![6, "Warhammer", "Hammer", 60, 120, 8.0, 300, "Uncommon", "Str 35"],
        cells![7, "Crystal Wand", "Wand", 45, 70, 0.5, 600, "Rare", "Int 20"],
        cells![8, "Dragon Slayer", "Greatsword", 80, 200, 6.0, 5000, "Legendary", "Str 40"],
    ]);

    let armor = SpecTable::new(
        "Armor",
        cells![
            "ID", "Name", "ArmorType", "Defense", "Weight", "Value", "Rarity", "Special_Effect"
        ],
    )
    .with_rows(vec![
        cells![1, "Leather Vest", "Light", 15, 2.0, 50, "Common", "None"],
        cells![2, "Chain Mail", "Medium", 25, 15.0, 200, "Common", "None"],
        cells![3, "Plate Armor", "Heavy", 40, 35.0, 800, "Uncommon", "None"],
        cells![4, "Elven Cloak", "Light", 20, 1.0, 500, "Rare", "+10 Stealth"],
        cells![5, "Dragon Scale", "Heavy", 60, 25.0, 3000, "Epic", "Fire Resist"],
        cells![6, "Mage Robes", "Cloth", 10, 1.5, 300, "Uncommon", "+20 MP"],
        cells![7, "Shadow Armor", "Medium", 35, 8.0, 1500, "Rare", "Invisibility"],
        cells![8, "Holy Plate", "Heavy", 50, 30.0, 2500, "Epic", "Undead Protection"],
    ]);

    SpecDataset::new("items", "items.xlsx", vec![weapons, armor])
}

pub fn dataset_skills() -> SpecDataset {
    let magic = SpecTable::new(
        "Magic_Skills",
        cells![
            "ID", "Name", "Element", "MP_Cost", "Damage", "Range", "Cast_Time", "Level_Required",
            "Description"
        ],
    )
    .with_rows(vec![
        cells![1, "Fireball", "Fire", 15, 35, "Medium", 2.0, 5, "Launches a ball of fire"],
        cells![2, "Ice Shard", "Ice", 12, 30, "Long", 1.5, 3, "Shoots sharp ice projectile"],
        cells![3, "Lightning Bolt", "Lightning", 20, 45, "Long", 1.0, 8, "Strikes with lightning"],
        cells![4, "Heal", "Light", 10, 0, "Touch", 3.0, 1, "Restores HP to target"],
        cells![5, "Shield", "Arcane", 8, 0, "Self", 2.0, 2, "Creates protective barrier"],
        cells![6, "Meteor", "Fire", 50, 100, "Area", 5.0, 20, "Summons falling meteor"],
        cells![7, "Blizzard", "Ice", 40, 80, "Area", 4.0, 18, "Creates ice storm"],
        cells![8, "Teleport", "Arcane", 25, 0, "Anywhere", 1.0, 15, "Instantly move to location"],
    ]);

    // Parry's multiplier is a whole 0 in an otherwise fractional column.
    let combat = SpecTable::new(
        "Combat_Skills",
        cells![
            "ID", "Name", "SkillType", "Stamina_Cost", "Damage_Multiplier", "Accuracy",
            "Level_Required", "Weapon_Type", "Description"
        ],
    )
    .with_rows(vec![
        cells![1, "Power Strike", "Attack", 10, 1.5, 90, 3, "Sword", "Powerful sword attack"],
        cells![2, "Precise Shot", "Ranged", 8, 1.3, 95, 5, "Bow", "Accurate arrow shot"],
        cells![3, "Whirlwind", "AOE", 20, 1.2, 85, 10, "Sword", "Spinning attack hits all"],
        cells![4, "Backstab", "Stealth", 15, 2.0, 80, 7, "Dagger", "Critical hit from behind"],
        cells![5, "Shield Bash", "Stun", 12, 0.8, 95, 4, "Shield", "Stuns target briefly"],
        cells![6, "Charge", "Movement", 18, 1.8, 75, 8, "Any", "Rush attack with momentum"],
        cells![7, "Parry", "Defense", 5, 0, 100, 2, "Melee", "Blocks and counters"],
        cells![8, "Berserker Rage", "Buff", 30, 2.5, 70, 15, "Any", "Increased damage, reduced defense"],
    ]);

    SpecDataset::new("skills", "skills.xlsx", vec![magic, combat])
}

pub fn dataset_monsters() -> SpecDataset {
    let monsters = SpecTable::new(
        "Monsters",
        cells![
            "ID", "Name", "MonsterType", "Level", "HP", "MP", "Attack", "Defense", "Speed",
            "EXP_Reward", "Gold_Drop", "Special_Abilities", "Weakness"
        ],
    )
    .with_rows(vec![
        cells![1, "Goblin", "Humanoid", 3, 45, 0, 15, 8, 25, 25, "5-15", "Sneak Attack", "Light"],
        cells![2, "Orc Warrior", "Humanoid", 8, 120, 10, 35, 20, 15, 80, "20-40", "Rage", "Magic"],
        cells![3, "Fire Drake", "Dragon", 15, 300, 50, 60, 35, 30, 200, "80-120", "Fire Breath", "Ice"],
        cells![4, "Skeleton", "Undead", 5, 60, 0, 20, 15, 10, 40, "10-25", "Bone Throw", "Holy"],
        cells![5, "Ice Elemental", "Elemental", 12, 180, 80, 40, 25, 20, 120, "50-80", "Ice Storm", "Fire"],
        cells![6, "Shadow Wolf", "Beast", 7, 90, 5, 30, 18, 40, 60, "15-30", "Shadow Step", "Light"],
        cells![7, "Ancient Lich", "Undead", 25, 500, 200, 80, 40, 15, 400, "200-300", "Death Magic", "Holy"],
        cells![8, "Stone Golem", "Construct", 18, 400, 0, 70, 60, 5, 250, "100-150", "Stone Skin", "Lightning"],
        cells![9, "Vampire Lord", "Undead", 22, 350, 100, 75, 30, 35, 300, "150-250", "Life Drain", "Holy"],
        cells![10, "Red Dragon", "Dragon", 30, 800, 150, 100, 50, 25, 500, "400-600", "Dragon Fire", "Ice"],
    ]);

    SpecDataset::new("monsters", "monsters.xlsx", vec![monsters])
}

pub fn dataset_quests() -> SpecDataset {
    let main_quests = SpecTable::new(
        "Main_Quests",
        cells![
            "ID", "Name", "Description", "Level_Required", "EXP_Reward", "Gold_Reward",
            "Item_Reward", "Prerequisites", "Location", "Quest_Giver"
        ],
    )
    .with_rows(vec![
        cells![1, "The Hero's Journey", "Begin your adventure", 1, 100, 50, "Iron Sword", "None", "Starting Village", "Village Elder"],
        cells![2, "Goblin Menace", "Clear the goblin camp", 3, 250, 150, "Leather Armor", "Quest 1", "Forest Outskirts", "Guard Captain"],
        cells![3, "The Lost Artifact", "Find the ancient relic", 8, 500, 300, "Magic Ring", "Quest 2", "Ancient Ruins", "Wise Sage"],
        cells![4, "Dragon's Lair", "Defeat the fire drake", 15, 1000, 800, "Dragon Scale", "Quest 3", "Mountain Cave", "Knight Commander"],
        cells![5, "The Final Battle", "Confront the Dark Lord", 25, 2000, 1500, "Legendary Weapon", "Quest 4", "Dark Castle", "High Priestess"],
    ]);

    let side_quests = SpecTable::new(
        "Side_Quests",
        cells![
            "ID", "Name", "Description", "Level_Required", "EXP_Reward", "Gold_Reward",
            "Item_Reward", "QuestType", "Repeatable"
        ],
    )
    .with_rows(vec![
        cells![1, "Herb Gathering", "Collect 10 healing herbs", 1, 50, 25, "Health Potion", "Collection", "Yes"],
        cells![2, "Merchant's Delivery", "Deliver package to next town", 2, 75, 40, "None", "Delivery", "Yes"],
        cells![3, "Wolf Hunt", "Kill 5 wolves", 5, 150, 80, "Wolf Pelt", "Hunting", "Yes"],
        cells![4, "Lost Cat", "Find the missing cat", 1, 30, 15, "Cat Treats", "Search", "No"],
        cells![5, "Bandit Camp", "Clear the bandit hideout", 10, 300, 200, "Bandit Armor", "Combat", "No"],
        cells![6, "Rare Minerals", "Mine 20 rare crystals", 8, 200, 120, "Crystal", "Mining", "Yes"],
        cells![7, "Ancient Tome", "Retrieve the lost spellbook", 12, 400, 250, "Spell Scroll", "Exploration", "No"],
        cells![8, "Tournament", "Win the fighting tournament", 15, 600, 500, "Champion's Ring", "Combat", "No"],
    ]);

    SpecDataset::new("quests", "quests.xlsx", vec![main_quests, side_quests])
}

#[cfg(test)]
mod tests {
    use rpgkit_io_xlsx::EnumCellValue;

    use super::*;

    #[test]
    fn test_keys_match_datasets_in_order() {
        let l_keys: Vec<String> = datasets().into_iter().map(|d| d.key).collect();
        assert_eq!(l_keys, TUP_DATASET_KEYS);
        for c_key in TUP_DATASET_KEYS {
            assert_eq!(dataset(c_key).map(|d| d.key), Some(c_key.to_string()));
        }
        assert!(dataset("npcs").is_none());
    }

    #[test]
    fn test_every_row_matches_header_width() {
        for spec_dataset in datasets() {
            for table in &spec_dataset.workbook.tables {
                assert!(
                    table.ragged_rows().is_empty(),
                    "{}/{} has ragged rows",
                    spec_dataset.key,
                    table.name
                );
                assert_eq!(table.first_header(), Some(&EnumCellValue::from("ID")));
            }
        }
    }

    #[test]
    fn test_table_layout() {
        let l_layout: Vec<(String, Vec<(String, usize)>)> = datasets()
            .into_iter()
            .map(|d| {
                let l_tables = d
                    .workbook
                    .tables
                    .iter()
                    .map(|t| (t.name.clone(), t.height()))
                    .collect();
                (d.file_name, l_tables)
            })
            .collect();

        let expected = vec![
            ("characters.xlsx", vec![("Characters", 8)]),
            ("items.xlsx", vec![("Weapons", 8), ("Armor", 8)]),
            ("skills.xlsx", vec![("Magic_Skills", 8), ("Combat_Skills", 8)]),
            ("monsters.xlsx", vec![("Monsters", 10)]),
            ("quests.xlsx", vec![("Main_Quests", 5), ("Side_Quests", 8)]),
        ];
        let expected: Vec<(String, Vec<(String, usize)>)> = expected
            .into_iter()
            .map(|(f, l)| {
                (
                    f.to_string(),
                    l.into_iter().map(|(n, h)| (n.to_string(), h)).collect(),
                )
            })
            .collect();
        assert_eq!(l_layout, expected);
    }

    #[test]
    fn test_character_first_row() {
        let characters = dataset_characters();
        let table = characters.workbook.active().expect("active table");
        assert_eq!(
            table.header_texts(),
            [
                "ID", "Name", "JobClass", "Level", "HP", "MP", "Strength", "Agility",
                "Intelligence", "Luck", "Weapon", "Armor"
            ]
        );
        assert_eq!(
            table.rows[0],
            cells![1, "Aragorn", "Warrior", 25, 350, 50, 85, 70, 45, 60, "Legendary Sword", "Plate Mail"]
        );
    }
}
