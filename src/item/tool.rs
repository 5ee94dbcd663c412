//! Tool components: per-block mining rules for an item.

use std::collections::BTreeSet;

/// One mining rule over a set of block ids.
///
/// A rule either overrides the mining speed or marks the item as the correct
/// tool for the listed blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRule {
    blocks: BTreeSet<u32>,
    speed: Option<f32>,
    correct_for_drops: Option<bool>,
}

impl ToolRule {
    pub fn mining_speed(blocks: BTreeSet<u32>, speed: f32) -> Self {
        Self {
            blocks,
            speed: Some(speed),
            correct_for_drops: None,
        }
    }

    pub fn correct_for_drops(blocks: BTreeSet<u32>) -> Self {
        Self {
            blocks,
            speed: None,
            correct_for_drops: Some(true),
        }
    }

    pub fn blocks(&self) -> &BTreeSet<u32> {
        &self.blocks
    }

    pub fn applies_to(&self, block_id: u32) -> bool {
        self.blocks.contains(&block_id)
    }

    pub fn speed(&self) -> Option<f32> {
        self.speed
    }

    pub fn is_correct_for_drops(&self) -> Option<bool> {
        self.correct_for_drops
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolProperties {
    rules: Vec<ToolRule>,
    default_mining_speed: f32,
    damage_per_block: i32,
}

impl ToolProperties {
    pub fn new(rules: Vec<ToolRule>, default_mining_speed: f32, damage_per_block: i32) -> Self {
        Self {
            rules,
            default_mining_speed,
            damage_per_block,
        }
    }

    pub fn rules(&self) -> &[ToolRule] {
        &self.rules
    }

    pub fn default_mining_speed(&self) -> f32 {
        self.default_mining_speed
    }

    pub fn damage_per_block(&self) -> i32 {
        self.damage_per_block
    }

    /// Speed for a block: the first rule with a speed that covers it, else the default
    pub fn mining_speed_for(&self, block_id: u32) -> f32 {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(block_id))
            .find_map(ToolRule::speed)
            .unwrap_or(self.default_mining_speed)
    }

    /// Whether the item drops the block when mined, per the first deciding rule
    pub fn is_correct_for(&self, block_id: u32) -> bool {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(block_id))
            .find_map(ToolRule::is_correct_for_drops)
            .unwrap_or(false)
    }
}
