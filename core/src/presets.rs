//! Ready made tables

use crate::{Category, PopulationTable, Tier};

const COMMON_ANCESTRIES: [&str; 10] = [
    "dwarf",
    "elf",
    "gnome",
    "goblin",
    "halfling",
    "human",
    "leshy",
    "orc",
    "aiuvarin (half-elf)",
    "dromaar (half-orc)",
];

const UNCOMMON_ANCESTRIES: [&str; 27] = [
    "athamaru",
    "azarketi",
    "catfolk",
    "centaur",
    "changeling",
    "geniekin",
    "dhampir",
    "dragonblood",
    "duskwalker",
    "fetchling",
    "hobgoblin",
    "kholo",
    "kitsune",
    "kobold",
    "lizardfolk",
    "merfolk",
    "minotaur",
    "mixed ancestry",
    "nagaji",
    "nephilim",
    "ratfolk",
    "samsaran",
    "tanuki",
    "tengu",
    "tripkee",
    "vanara",
    "wayang",
];

const RARE_ANCESTRIES: [&str; 22] = [
    "anadi",
    "android",
    "automaton",
    "awakened animal",
    "beastkin",
    "conrasu",
    "fleshwarp",
    "ghoran",
    "goloma",
    "kashrishi",
    "poppet",
    "reflection",
    "sarangay",
    "shisk",
    "shoony",
    "skeleton (undead)",
    "sprite",
    "strix",
    "surki",
    "vishkanya",
    "yaksha",
    "yaoguai",
];

fn evenly_weighted(name: &str, chance: f64, categories: &[&str]) -> Tier {
    Tier {
        name: name.to_owned(),
        chance,
        categories: categories.iter().map(|&c| Category::new(c, 1)).collect(),
    }
}

/// Common, uncommon and rare player ancestries, all equally likely within their tier
pub fn default_ancestries() -> PopulationTable {
    PopulationTable::new(vec![
        evenly_weighted("Common", 0.70, &COMMON_ANCESTRIES),
        evenly_weighted("Uncommon", 0.25, &UNCOMMON_ANCESTRIES),
        evenly_weighted("Rare", 0.05, &RARE_ANCESTRIES),
    ])
}
