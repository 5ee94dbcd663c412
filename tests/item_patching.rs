//! Integration tests for the item patcher rule chain

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Arc;
use version_bridge::compat::patcher::CROSSBOW;
use version_bridge::compat::{CompatibilityRuleSet, ItemDescriptorPatcher, ToolTable};
use version_bridge::item::{DataKey, DataValue, ItemDescriptor, ToolProperties, ToolRule};
use version_bridge::version::catalog::{
    A1_2_6, B1_7_3, B1_8_1, V1_0, V1_12_2, V1_16_4, V1_17, V1_17_1, V1_18, V1_20_5, V1_8, V1_9,
};

fn patcher_with(tools: ToolTable) -> ItemDescriptorPatcher {
    ItemDescriptorPatcher::new(Arc::new(CompatibilityRuleSet::new(tools)))
}

fn patcher() -> ItemDescriptorPatcher {
    patcher_with(ToolTable::empty())
}

fn tool(speed: f32) -> ToolProperties {
    ToolProperties::new(
        vec![ToolRule::mining_speed([1, 2].into_iter().collect(), speed)],
        1.0,
        1,
    )
}

#[test]
fn test_legacy_food_is_unstackable_with_empty_food_marker() {
    for version in [A1_2_6, B1_7_3] {
        let mut apple = ItemDescriptor::new("minecraft:apple");
        apple.data_mut().set(DataValue::MaxStackSize(64));
        patcher().patch(&mut apple, &version);

        assert_eq!(apple.data().max_stack_size(), Some(1), "{version}");
        assert!(apple.data().has(DataKey::Food));
        assert!(apple.data().is_empty_marker(DataKey::Food));
        assert!(apple.data().food().is_none());
    }
}

#[test]
fn test_food_rule_stops_after_b1_7_3() {
    let mut apple = ItemDescriptor::new("minecraft:apple");
    apple.data_mut().set(DataValue::MaxStackSize(64));
    patcher().patch(&mut apple, &B1_8_1);

    assert_eq!(apple.data().max_stack_size(), Some(64));
    assert!(!apple.data().has(DataKey::Food));
}

#[test]
fn test_iron_sword_gets_synthetic_food_in_blocking_era() {
    for version in [B1_8_1, V1_0, V1_8] {
        let mut sword = ItemDescriptor::new("minecraft:iron_sword");
        patcher().patch(&mut sword, &version);

        let food = sword.data().food().expect("sword food component");
        assert_eq!(food.nutrition, 0, "{version}");
        assert_eq!(food.saturation_modifier, 0.0);
        assert_eq!(food.eat_duration_ticks, 3600);
        assert!(food.effects.is_empty());
    }

    for version in [B1_7_3, V1_9, V1_20_5] {
        let mut sword = ItemDescriptor::new("minecraft:iron_sword");
        patcher().patch(&mut sword, &version);
        assert!(!sword.data().has(DataKey::Food), "{version}");
    }
}

#[test]
fn test_crossbow_durability_boundary() {
    for (version, expected) in [(V1_17, 326), (V1_17_1, 326), (V1_18, 465)] {
        let mut crossbow = ItemDescriptor::new(CROSSBOW);
        crossbow.data_mut().set(DataValue::MaxDamage(465));
        patcher().patch(&mut crossbow, &version);
        assert_eq!(crossbow.data().max_damage(), Some(expected), "{version}");
    }
}

#[test]
fn test_legacy_armor_durability() {
    let mut helmet = ItemDescriptor::new("minecraft:diamond_helmet");
    helmet.data_mut().set(DataValue::MaxDamage(363));
    patcher().patch(&mut helmet, &B1_8_1);
    assert_eq!(helmet.data().max_damage(), Some(264));

    let mut modern = ItemDescriptor::new("minecraft:diamond_helmet");
    modern.data_mut().set(DataValue::MaxDamage(363));
    patcher().patch(&mut modern, &V1_0);
    assert_eq!(modern.data().max_damage(), Some(363));
}

#[test]
fn test_unrelated_items_are_untouched() {
    let mut stone = ItemDescriptor::new("minecraft:stone").with_amount(12);
    stone.data_mut().set(DataValue::MaxStackSize(64));
    let before = stone.clone();

    for version in [B1_7_3, B1_8_1, V1_8, V1_17_1, V1_20_5] {
        patcher().patch(&mut stone, &version);
    }
    assert_eq!(stone, before);
}

#[test]
fn test_tool_selection_prefers_oldest_covering_entry() {
    let pickaxe = "minecraft:iron_pickaxe";
    let tools = ToolTable::new(vec![
        (V1_8, HashMap::from([(pickaxe.to_string(), tool(4.0))])),
        (V1_16_4, HashMap::from([(pickaxe.to_string(), tool(6.0))])),
    ])
    .unwrap();
    let patcher = patcher_with(tools);

    let cases = [(B1_7_3, Some(4.0)), (V1_8, Some(4.0)), (V1_12_2, Some(6.0)), (V1_18, None)];
    for (version, expected) in cases {
        let mut item = ItemDescriptor::new(pickaxe);
        patcher.patch(&mut item, &version);
        let speed = item.data().tool().map(|tool| tool.mining_speed_for(1));
        assert_eq!(speed, expected, "{version}");
    }
}

#[test]
fn test_tool_selection_is_repeatable() {
    let tools = ToolTable::new(vec![(
        V1_8,
        HashMap::from([("minecraft:shears".to_string(), tool(2.0))]),
    )])
    .unwrap();
    let patcher = patcher_with(tools);

    let mut first = ItemDescriptor::new("minecraft:shears");
    let mut second = ItemDescriptor::new("minecraft:shears");
    patcher.patch(&mut first, &B1_8_1);
    patcher.patch(&mut second, &B1_8_1);
    assert_eq!(first, second);

    // patching twice changes nothing further
    let once = first.clone();
    patcher.patch(&mut first, &B1_8_1);
    assert_eq!(first, once);
}
