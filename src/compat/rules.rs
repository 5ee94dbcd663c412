//! # Compatibility Rule Set
//!
//! Read-only tables consulted by the item patcher. Everything here is built
//! once during startup and never mutated afterward, so a shared
//! `Arc<CompatibilityRuleSet>` can be read from every connection without
//! locking.

use crate::error::{BridgeError, Result};
use crate::item::ToolProperties;
use crate::version::ProtocolVersion;
use std::collections::{HashMap, HashSet};

/// Items that were edible and unstackable up to b1.7.3
const LEGACY_FOOD_ITEMS: &[&str] = &[
    "minecraft:apple",
    "minecraft:mushroom_stew",
    "minecraft:bread",
    "minecraft:porkchop",
    "minecraft:cooked_porkchop",
    "minecraft:golden_apple",
    "minecraft:cod",
    "minecraft:cooked_cod",
    "minecraft:cookie",
];

/// Swords that doubled as block/eat animation triggers from b1.8 to 1.8
const LEGACY_SWORD_ITEMS: &[&str] = &[
    "minecraft:wooden_sword",
    "minecraft:stone_sword",
    "minecraft:iron_sword",
    "minecraft:golden_sword",
    "minecraft:diamond_sword",
];

/// Armor durability up to b1.8.1
const LEGACY_ARMOR_MAX_DAMAGE: &[(&str, i32)] = &[
    ("minecraft:leather_helmet", 33),
    ("minecraft:leather_chestplate", 48),
    ("minecraft:leather_leggings", 45),
    ("minecraft:leather_boots", 39),
    ("minecraft:chainmail_helmet", 66),
    ("minecraft:chainmail_chestplate", 96),
    ("minecraft:chainmail_leggings", 90),
    ("minecraft:chainmail_boots", 78),
    ("minecraft:iron_helmet", 132),
    ("minecraft:iron_chestplate", 192),
    ("minecraft:iron_leggings", 180),
    ("minecraft:iron_boots", 156),
    ("minecraft:diamond_helmet", 264),
    ("minecraft:diamond_chestplate", 384),
    ("minecraft:diamond_leggings", 360),
    ("minecraft:diamond_boots", 312),
    ("minecraft:golden_helmet", 66),
    ("minecraft:golden_chestplate", 96),
    ("minecraft:golden_leggings", 90),
    ("minecraft:golden_boots", 78),
];

/// Tool properties per item, keyed by the last generation they apply to.
///
/// Entries are strictly ascending by version. Selection scans them in order
/// and the first applicable entry that knows the item wins.
#[derive(Debug, Clone, Default)]
pub struct ToolTable {
    entries: Vec<(ProtocolVersion, HashMap<String, ToolProperties>)>,
}

impl ToolTable {
    /// Build a table, rejecting entries that are not strictly ascending
    pub fn new(entries: Vec<(ProtocolVersion, HashMap<String, ToolProperties>)>) -> Result<Self> {
        for pair in entries.windows(2) {
            let (previous, next) = (&pair[0].0, &pair[1].0);
            if next <= previous {
                return Err(BridgeError::UnorderedToolTable {
                    previous: previous.to_string(),
                    next: next.to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Properties for `identifier` from the oldest entry that still covers `server_version`
    pub fn select(
        &self,
        server_version: &ProtocolVersion,
        identifier: &str,
    ) -> Option<&ToolProperties> {
        self.entries
            .iter()
            .filter(|(version, _)| server_version.older_than_or_equal_to(version))
            .find_map(|(_, items)| items.get(identifier))
    }

    pub fn versions(&self) -> impl Iterator<Item = &ProtocolVersion> {
        self.entries.iter().map(|(version, _)| version)
    }

    pub fn get(&self, version: &ProtocolVersion) -> Option<&HashMap<String, ToolProperties>> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == version)
            .map(|(_, items)| items)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CompatibilityRuleSet {
    food_items: HashSet<String>,
    sword_items: HashSet<String>,
    armor_max_damage: HashMap<String, i32>,
    tools: ToolTable,
}

impl Default for CompatibilityRuleSet {
    fn default() -> Self {
        Self::new(ToolTable::empty())
    }
}

impl CompatibilityRuleSet {
    /// Rule set with the built-in legacy item tables and the given tool table
    pub fn new(tools: ToolTable) -> Self {
        Self {
            food_items: LEGACY_FOOD_ITEMS.iter().map(|s| s.to_string()).collect(),
            sword_items: LEGACY_SWORD_ITEMS.iter().map(|s| s.to_string()).collect(),
            armor_max_damage: LEGACY_ARMOR_MAX_DAMAGE
                .iter()
                .map(|(item, damage)| (item.to_string(), *damage))
                .collect(),
            tools,
        }
    }

    pub fn is_legacy_food(&self, identifier: &str) -> bool {
        self.food_items.contains(identifier)
    }

    pub fn is_legacy_sword(&self, identifier: &str) -> bool {
        self.sword_items.contains(identifier)
    }

    pub fn legacy_armor_max_damage(&self, identifier: &str) -> Option<i32> {
        self.armor_max_damage.get(identifier).copied()
    }

    pub fn tools(&self) -> &ToolTable {
        &self.tools
    }
}
