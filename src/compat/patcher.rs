//! # Item Descriptor Patcher
//!
//! Repairs converted items so they behave the way the server's generation
//! expects. The base translation layer calls registered [`ItemPostProcessor`]s
//! after every item conversion; [`ItemDescriptorPatcher`] is the processor
//! that applies the compatibility rule chain.
//!
//! ## Rule chain (evaluated in order)
//! 1. server <= 1.17.1: crossbows get max damage 326
//! 2. b1.8 <= server <= 1.8: legacy swords get a synthetic food component
//! 3. server <= b1.8.1: legacy armor gets its historical max damage
//! 4. server <= b1.7.3: legacy food is unstackable with an empty food component
//! 5. tool rules: first table entry covering the server version that knows the item
//!
//! Rules 1-4 are independent. Rule 5 stops at its first match.

use crate::compat::rules::CompatibilityRuleSet;
use crate::item::{DataKey, DataValue, FoodProperties, ItemDescriptor};
use crate::utils::metrics::global_metrics;
use crate::version::catalog::{B1_7_3, B1_8_1, V1_17_1, V1_8};
use crate::version::ProtocolVersion;
use std::sync::Arc;
use tracing::trace;

pub const CROSSBOW: &str = "minecraft:crossbow";

/// Crossbow durability before enchantments could vary it
pub const LEGACY_CROSSBOW_MAX_DAMAGE: i32 = 326;

/// Ticks it takes to "eat" a sword in the blocking-animation era
pub const LEGACY_SWORD_EAT_TICKS: i32 = 3600;

/// Hook the base conversion pipeline invokes after producing each item
pub trait ItemPostProcessor: Send + Sync {
    fn post_process(&self, item: &mut ItemDescriptor, server_version: &ProtocolVersion);
}

impl<F> ItemPostProcessor for F
where
    F: Fn(&mut ItemDescriptor, &ProtocolVersion) + Send + Sync,
{
    fn post_process(&self, item: &mut ItemDescriptor, server_version: &ProtocolVersion) {
        self(item, server_version)
    }
}

/// Ordered list of post-processors run after each item conversion
#[derive(Default, Clone)]
pub struct ItemRewriteHooks {
    hooks: Vec<Arc<dyn ItemPostProcessor>>,
}

impl ItemRewriteHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Arc<dyn ItemPostProcessor>) {
        self.hooks.push(hook);
    }

    pub fn with_hook(mut self, hook: Arc<dyn ItemPostProcessor>) -> Self {
        self.register(hook);
        self
    }

    /// Run every hook in registration order
    pub fn run(&self, item: &mut ItemDescriptor, server_version: &ProtocolVersion) {
        for hook in &self.hooks {
            hook.post_process(item, server_version);
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

pub struct ItemDescriptorPatcher {
    rules: Arc<CompatibilityRuleSet>,
}

impl ItemDescriptorPatcher {
    pub fn new(rules: Arc<CompatibilityRuleSet>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &CompatibilityRuleSet {
        &self.rules
    }

    /// Apply the rule chain to `item` for a connection whose server runs `server_version`
    pub fn patch(&self, item: &mut ItemDescriptor, server_version: &ProtocolVersion) {
        let identifier = item.identifier().to_owned();
        let data = item.data_mut();

        if server_version.older_than_or_equal_to(&V1_17_1) && identifier == CROSSBOW {
            data.set(DataValue::MaxDamage(LEGACY_CROSSBOW_MAX_DAMAGE));
        }

        if server_version.between_inclusive(&B1_8_1, &V1_8) && self.rules.is_legacy_sword(&identifier)
        {
            data.set(DataValue::Food(FoodProperties {
                nutrition: 0,
                saturation_modifier: 0.0,
                can_always_eat: true,
                eat_duration_ticks: LEGACY_SWORD_EAT_TICKS,
                effects: Vec::new(),
            }));
        }

        if server_version.older_than_or_equal_to(&B1_8_1) {
            if let Some(max_damage) = self.rules.legacy_armor_max_damage(&identifier) {
                data.set(DataValue::MaxDamage(max_damage));
            }
        }

        if server_version.older_than_or_equal_to(&B1_7_3) && self.rules.is_legacy_food(&identifier)
        {
            data.set(DataValue::MaxStackSize(1));
            data.add_empty(DataKey::Food);
        }

        if let Some(tool) = self.rules.tools().select(server_version, &identifier) {
            data.set(DataValue::Tool(tool.clone()));
            global_metrics().tool_rule_applied();
            trace!(item = %identifier, version = %server_version, "Applied tool properties");
        }

        global_metrics().item_patched();
    }
}

impl ItemPostProcessor for ItemDescriptorPatcher {
    fn post_process(&self, item: &mut ItemDescriptor, server_version: &ProtocolVersion) {
        self.patch(item, server_version);
    }
}
