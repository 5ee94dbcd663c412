//! Structured item data.
//!
//! A component is either absent, present with a value, or present but empty.
//! The empty marker tells the client the component exists without sending any
//! payload for it.

use super::tool::ToolProperties;
use std::collections::BTreeMap;
use std::fmt;

/// Data component keys the compatibility rules touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataKey {
    MaxStackSize,
    MaxDamage,
    Food,
    Tool,
}

impl DataKey {
    pub fn identifier(self) -> &'static str {
        match self {
            DataKey::MaxStackSize => "minecraft:max_stack_size",
            DataKey::MaxDamage => "minecraft:max_damage",
            DataKey::Food => "minecraft:food",
            DataKey::Tool => "minecraft:tool",
        }
    }
}

impl fmt::Display for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// A status effect granted when food is eaten
#[derive(Debug, Clone, PartialEq)]
pub struct FoodEffect {
    pub effect: String,
    pub duration: i32,
    pub amplifier: u8,
    pub probability: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodProperties {
    pub nutrition: i32,
    pub saturation_modifier: f32,
    pub can_always_eat: bool,
    /// Ticks needed to finish eating
    pub eat_duration_ticks: i32,
    pub effects: Vec<FoodEffect>,
}

/// Typed component values
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    MaxStackSize(i32),
    MaxDamage(i32),
    Food(FoodProperties),
    Tool(ToolProperties),
}

impl DataValue {
    pub fn key(&self) -> DataKey {
        match self {
            DataValue::MaxStackSize(_) => DataKey::MaxStackSize,
            DataValue::MaxDamage(_) => DataKey::MaxDamage,
            DataValue::Food(_) => DataKey::Food,
            DataValue::Tool(_) => DataKey::Tool,
        }
    }
}

/// Sparse key/value container; `None` marks a present-but-empty component
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredDataContainer {
    entries: BTreeMap<DataKey, Option<DataValue>>,
}

impl StructuredDataContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the component addressed by the value's key
    pub fn set(&mut self, value: DataValue) {
        self.entries.insert(value.key(), Some(value));
    }

    /// Mark a component present without a value
    pub fn add_empty(&mut self, key: DataKey) {
        self.entries.insert(key, None);
    }

    pub fn has(&self, key: DataKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// True when the component is present and carries no value
    pub fn is_empty_marker(&self, key: DataKey) -> bool {
        matches!(self.entries.get(&key), Some(None))
    }

    pub fn get(&self, key: DataKey) -> Option<&DataValue> {
        self.entries.get(&key).and_then(Option::as_ref)
    }

    pub fn remove(&mut self, key: DataKey) -> bool {
        self.entries.remove(&key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = DataKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn max_stack_size(&self) -> Option<i32> {
        match self.get(DataKey::MaxStackSize) {
            Some(DataValue::MaxStackSize(size)) => Some(*size),
            _ => None,
        }
    }

    pub fn max_damage(&self) -> Option<i32> {
        match self.get(DataKey::MaxDamage) {
            Some(DataValue::MaxDamage(damage)) => Some(*damage),
            _ => None,
        }
    }

    pub fn food(&self) -> Option<&FoodProperties> {
        match self.get(DataKey::Food) {
            Some(DataValue::Food(food)) => Some(food),
            _ => None,
        }
    }

    pub fn tool(&self) -> Option<&ToolProperties> {
        match self.get(DataKey::Tool) {
            Some(DataValue::Tool(tool)) => Some(tool),
            _ => None,
        }
    }
}
