use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::collections::HashMap;
use std::hint::black_box;
use std::sync::Arc;
use version_bridge::compat::{CompatibilityRuleSet, ItemDescriptorPatcher, ToolTable};
use version_bridge::item::{ItemDescriptor, ToolProperties, ToolRule};
use version_bridge::version::catalog::{B1_7_3, V1_12_2, V1_16_4, V1_20_5, V1_8};

#[allow(clippy::unwrap_used)]
fn tool_table() -> ToolTable {
    let pickaxe = ToolProperties::new(
        vec![ToolRule::mining_speed((0..64).collect(), 6.0)],
        1.0,
        1,
    );
    let items: HashMap<String, ToolProperties> = ["wooden", "stone", "iron", "golden", "diamond"]
        .iter()
        .map(|tier| (format!("minecraft:{tier}_pickaxe"), pickaxe.clone()))
        .collect();
    ToolTable::new(vec![(V1_8, items.clone()), (V1_16_4, items)]).unwrap()
}

fn bench_patch(c: &mut Criterion) {
    let mut group = c.benchmark_group("item_patch");
    let patcher = ItemDescriptorPatcher::new(Arc::new(CompatibilityRuleSet::new(tool_table())));

    let cases = [
        ("food_b1_7_3", "minecraft:apple", B1_7_3),
        ("sword_1_8", "minecraft:iron_sword", V1_8),
        ("tool_1_12_2", "minecraft:iron_pickaxe", V1_12_2),
        ("untouched_1_20_5", "minecraft:stone", V1_20_5),
    ];

    for (name, identifier, version) in cases {
        group.bench_function(name, |b| {
            b.iter_batched(
                || ItemDescriptor::new(identifier),
                |mut item| {
                    patcher.patch(&mut item, &version);
                    black_box(item)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_patch);
criterion_main!(benches);
