//! # Compatibility Table Loader
//!
//! Reads the per-version tool component table:
//!
//! ```text
//! {
//!   "<version-name>": [
//!     { "item": "minecraft:iron_pickaxe",
//!       "default_mining_speed": 1.0,
//!       "damage_per_block": 1,
//!       "suitable_for": ["#stone", "minecraft:iron_ore"],
//!       "mining_speeds": [{ "blocks": ["#stone"], "speed": 6.0 }] },
//!     ...
//!   ],
//!   ...
//! }
//! ```
//!
//! Keys must appear in ascending chronological order; the resulting
//! [`ToolTable`] keeps that order and rejects anything else.
//!
//! The version registry may still be populating while this runs. Each key is
//! awaited for up to `LoaderConfig::registry_wait_timeout`; an entry whose
//! version never appears is skipped with a warning, or fails the load when
//! `strict_version_resolution` is set.

use crate::compat::blocks::{block_refs_to_ids, BlockIdMapping, BlockRef, MaterialTable};
use crate::compat::rules::{CompatibilityRuleSet, ToolTable};
use crate::config::LoaderConfig;
use crate::error::{constants, BridgeError, Result};
use crate::item::{ToolProperties, ToolRule};
use crate::utils::metrics::{global_metrics, Timer};
use crate::version::{ProtocolVersion, VersionRegistry};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// One tool component definition
#[derive(Debug, Clone, Deserialize)]
pub struct ToolComponentDef {
    pub item: String,
    pub default_mining_speed: f32,
    pub damage_per_block: i32,
    pub suitable_for: Vec<BlockRef>,
    pub mining_speeds: Vec<MiningSpeedDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MiningSpeedDef {
    pub blocks: Vec<BlockRef>,
    pub speed: f32,
}

/// Parse the raw table into `(version-name, definitions)` pairs in source order.
///
/// Any structural problem fails the whole table.
pub fn parse_table(value: &serde_json::Value) -> Result<Vec<(String, Vec<ToolComponentDef>)>> {
    let root = value
        .as_object()
        .ok_or_else(|| BridgeError::TableError(constants::ERR_TABLE_NOT_OBJECT.into()))?;

    root.iter()
        .map(|(version_name, components)| {
            let defs = Vec::<ToolComponentDef>::deserialize(components).map_err(|e| {
                BridgeError::TableError(format!("entry '{version_name}': {e}"))
            })?;
            Ok((version_name.clone(), defs))
        })
        .collect()
}

pub struct CompatibilityTableLoader {
    registry: Arc<VersionRegistry>,
    blocks: Arc<dyn BlockIdMapping>,
    materials: Arc<MaterialTable>,
    config: LoaderConfig,
}

impl CompatibilityTableLoader {
    pub fn new(
        registry: Arc<VersionRegistry>,
        blocks: Arc<dyn BlockIdMapping>,
        materials: Arc<MaterialTable>,
    ) -> Self {
        Self {
            registry,
            blocks,
            materials,
            config: LoaderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the tool table from a JSON value
    #[instrument(skip_all, fields(strict = self.config.strict_version_resolution))]
    pub async fn load(&self, table: &serde_json::Value) -> Result<ToolTable> {
        let _timer = Timer::start("tool_table_load");
        let parsed = parse_table(table)?;
        let mut entries = Vec::with_capacity(parsed.len());

        for (version_name, defs) in parsed {
            let Some(version) = self
                .registry
                .wait_for(&version_name, self.config.registry_wait_timeout)
                .await
            else {
                if self.config.strict_version_resolution {
                    return Err(BridgeError::UnresolvedVersion(version_name));
                }
                global_metrics().table_entry_skipped();
                warn!(
                    version = %version_name,
                    timeout_ms = self.config.registry_wait_timeout.as_millis() as u64,
                    "Version did not resolve in time, skipping tool table entry"
                );
                continue;
            };

            let items = self.build_entry(&version, &defs);
            debug!(version = %version, items = items.len(), "Loaded tool table entry");
            global_metrics().table_entry_loaded();
            entries.push((version, items));
        }

        let table = ToolTable::new(entries)?;
        info!(entries = table.len(), "Tool compatibility table loaded");
        Ok(table)
    }

    pub async fn load_str(&self, raw: &str) -> Result<ToolTable> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        self.load(&value).await
    }

    pub async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<ToolTable> {
        let raw = tokio::fs::read_to_string(path).await?;
        self.load_str(&raw).await
    }

    /// Load the tool table and wrap it with the built-in legacy item tables
    pub async fn load_rule_set(&self, table: &serde_json::Value) -> Result<CompatibilityRuleSet> {
        Ok(CompatibilityRuleSet::new(self.load(table).await?))
    }

    fn build_entry(
        &self,
        version: &ProtocolVersion,
        defs: &[ToolComponentDef],
    ) -> HashMap<String, ToolProperties> {
        let resolve =
            |refs: &[BlockRef]| block_refs_to_ids(version, refs, self.blocks.as_ref(), &self.materials);

        defs.iter()
            .map(|def| {
                let mut rules: Vec<ToolRule> = def
                    .mining_speeds
                    .iter()
                    .map(|speed| ToolRule::mining_speed(resolve(&speed.blocks), speed.speed))
                    .collect();

                let suitable_for = resolve(&def.suitable_for);
                if !suitable_for.is_empty() {
                    rules.push(ToolRule::correct_for_drops(suitable_for));
                }

                (
                    def.item.clone(),
                    ToolProperties::new(rules, def.default_mining_speed, def.damage_per_block),
                )
            })
            .collect()
    }
}
