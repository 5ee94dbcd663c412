//! # Block Reference Resolution
//!
//! Turns the block references used by the compatibility tables into numeric
//! block ids of the target protocol.
//!
//! A reference is either a literal block identifier (`minecraft:stone`) or a
//! `#`-prefixed material wildcard (`#stone`). Wildcards expand through the
//! [`MaterialTable`], which records, per block, the material tag it carried in
//! each protocol generation.

use crate::error::{constants, BridgeError, Result};
use crate::version::{ProtocolVersion, VersionRegistry};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::{debug, trace};

/// Prefix marking a material wildcard
pub const MATERIAL_PREFIX: char = '#';

/// Block-id lookup scoped to the target protocol
pub trait BlockIdMapping: Send + Sync {
    /// Numeric id for a block identifier, `None` when the block is unknown
    fn block_id(&self, identifier: &str) -> Option<u32>;
}

/// Block-id table where the id of a block is its position in the source list
#[derive(Debug, Clone, Default)]
pub struct BlockIdTable {
    ids: HashMap<String, u32>,
}

impl BlockIdTable {
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = identifiers
            .into_iter()
            .zip(0u32..)
            .map(|(identifier, id)| (identifier.into(), id))
            .collect();
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl BlockIdMapping for BlockIdTable {
    fn block_id(&self, identifier: &str) -> Option<u32> {
        self.ids.get(identifier).copied()
    }
}

/// A block reference as written in a compatibility table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum BlockRef {
    Block(String),
    Material(String),
}

impl BlockRef {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(MATERIAL_PREFIX) {
            Some(material) => BlockRef::Material(material.to_string()),
            None => BlockRef::Block(raw.to_string()),
        }
    }
}

impl From<String> for BlockRef {
    fn from(raw: String) -> Self {
        match raw.strip_prefix(MATERIAL_PREFIX) {
            Some(material) => BlockRef::Material(material.to_string()),
            None => BlockRef::Block(raw),
        }
    }
}

impl From<&str> for BlockRef {
    fn from(raw: &str) -> Self {
        BlockRef::parse(raw)
    }
}

impl fmt::Display for BlockRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockRef::Block(name) => f.write_str(name),
            BlockRef::Material(material) => write!(f, "{MATERIAL_PREFIX}{material}"),
        }
    }
}

#[derive(Debug, Clone)]
struct MaterialRecord {
    block: String,
    /// Ascending by version, in source order
    materials: Vec<(ProtocolVersion, String)>,
}

/// Version-scoped material tags per block
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    records: Vec<MaterialRecord>,
    /// Block identifier to position in `records`
    index: HashMap<String, usize>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `block` carried `material` up to and including `version`
    pub fn insert(
        &mut self,
        block: impl Into<String>,
        version: ProtocolVersion,
        material: impl Into<String>,
    ) {
        let block = block.into();
        let entry = (version, material.into());
        match self.index.get(&block) {
            Some(&position) => self.records[position].materials.push(entry),
            None => {
                self.index.insert(block.clone(), self.records.len());
                self.records.push(MaterialRecord {
                    block,
                    materials: vec![entry],
                });
            }
        }
    }

    /// Load `{ "<block>": { "<version-name>": "<material>", ... }, ... }`.
    ///
    /// Version names must already resolve against `registry`; an unknown name
    /// fails the load.
    pub fn from_json(value: &serde_json::Value, registry: &VersionRegistry) -> Result<Self> {
        let root = value
            .as_object()
            .ok_or_else(|| BridgeError::TableError(constants::ERR_MATERIALS_NOT_OBJECT.into()))?;

        let mut table = Self::new();
        for (block, versions) in root {
            let versions = versions.as_object().ok_or_else(|| {
                BridgeError::TableError(format!("materials of '{block}' must be an object"))
            })?;
            for (version_name, material) in versions {
                let version = registry
                    .closest_match(version_name)
                    .ok_or_else(|| BridgeError::UnresolvedVersion(version_name.clone()))?;
                let material = material.as_str().ok_or_else(|| {
                    BridgeError::TableError(format!(
                        "material of '{block}' at {version_name} must be a string"
                    ))
                })?;
                table.insert(block.clone(), version, material);
            }
        }
        debug!(blocks = table.records.len(), "Loaded block material table");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Blocks tagged `material` in a generation at or after `threshold`.
    ///
    /// For each block, the first recorded version with
    /// `threshold <= version` and a matching tag decides inclusion.
    pub fn blocks_with_material<'a, 'b>(
        &'a self,
        threshold: &'b ProtocolVersion,
        material: &'b str,
    ) -> impl Iterator<Item = &'a str> + 'b
    where
        'a: 'b,
    {
        self.records.iter().filter_map(move |record| {
            record
                .materials
                .iter()
                .find(|(version, tag)| threshold.older_than_or_equal_to(version) && tag == material)
                .map(|_| record.block.as_str())
        })
    }
}

/// Resolve block references to the deduplicated set of block ids at `threshold`.
///
/// Unknown blocks and materials contribute nothing.
pub fn block_refs_to_ids(
    threshold: &ProtocolVersion,
    refs: &[BlockRef],
    mapping: &dyn BlockIdMapping,
    materials: &MaterialTable,
) -> BTreeSet<u32> {
    let mut ids = BTreeSet::new();
    for block_ref in refs {
        match block_ref {
            BlockRef::Block(name) => match mapping.block_id(name) {
                Some(id) => {
                    ids.insert(id);
                }
                None => trace!(block = %name, "Unknown block reference"),
            },
            BlockRef::Material(material) => {
                ids.extend(
                    materials
                        .blocks_with_material(threshold, material)
                        .filter_map(|block| mapping.block_id(block)),
                );
            }
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::version::catalog::{B1_7_3, B1_8_1, V1_12_2, V1_20_5, V1_8};

    fn mapping() -> BlockIdTable {
        BlockIdTable::from_identifiers([
            "minecraft:air",
            "minecraft:stone",
            "minecraft:cobblestone",
            "minecraft:oak_planks",
            "minecraft:glowstone",
        ])
    }

    fn materials() -> MaterialTable {
        let mut table = MaterialTable::new();
        table.insert("minecraft:stone", V1_20_5, "stone");
        table.insert("minecraft:cobblestone", V1_20_5, "stone");
        table.insert("minecraft:oak_planks", V1_20_5, "wood");
        table.insert("minecraft:glowstone", B1_8_1, "stone");
        table.insert("minecraft:glowstone", V1_20_5, "glass");
        table
    }

    #[test]
    fn parse_distinguishes_materials() {
        assert_eq!(BlockRef::parse("#stone"), BlockRef::Material("stone".into()));
        assert_eq!(
            BlockRef::parse("minecraft:stone"),
            BlockRef::Block("minecraft:stone".into())
        );
        assert_eq!(BlockRef::parse("#wood").to_string(), "#wood");
    }

    #[test]
    fn literal_refs_resolve_and_unknown_are_dropped() {
        let refs = [BlockRef::parse("minecraft:stone"), BlockRef::parse("minecraft:nope")];
        let ids = block_refs_to_ids(&V1_8, &refs, &mapping(), &materials());
        assert_eq!(ids, [1].into_iter().collect());
    }

    #[test]
    fn material_wildcard_is_version_scoped() {
        let refs = [BlockRef::parse("#stone")];
        // glowstone counted as stone until b1.8.1
        let old = block_refs_to_ids(&B1_7_3, &refs, &mapping(), &materials());
        assert_eq!(old, [1, 2, 4].into_iter().collect());

        let modern = block_refs_to_ids(&V1_12_2, &refs, &mapping(), &materials());
        assert_eq!(modern, [1, 2].into_iter().collect());

        let glass = block_refs_to_ids(&V1_12_2, &[BlockRef::parse("#glass")], &mapping(), &materials());
        assert_eq!(glass, [4].into_iter().collect());
    }

    #[test]
    fn unknown_material_yields_nothing() {
        let ids = block_refs_to_ids(&V1_8, &[BlockRef::parse("#lava")], &mapping(), &materials());
        assert!(ids.is_empty());
    }

    #[test]
    fn material_table_from_json_keeps_source_order() {
        let registry = VersionRegistry::standard();
        let json = serde_json::json!({
            "minecraft:glowstone": { "b1.8.1": "stone", "1.20.5": "glass" }
        });
        let table = MaterialTable::from_json(&json, &registry).unwrap();
        let old: Vec<&str> = table.blocks_with_material(&B1_7_3, "stone").collect();
        assert_eq!(old, vec!["minecraft:glowstone"]);
        let modern: Vec<&str> = table.blocks_with_material(&V1_8, "stone").collect();
        assert!(modern.is_empty());
    }

    #[test]
    fn interleaved_inserts_group_by_block() {
        let mut table = MaterialTable::new();
        table.insert("minecraft:glowstone", B1_8_1, "stone");
        table.insert("minecraft:stone", V1_20_5, "stone");
        table.insert("minecraft:glowstone", V1_20_5, "glass");
        assert_eq!(table.len(), 2);

        let glass: Vec<&str> = table.blocks_with_material(&V1_12_2, "glass").collect();
        assert_eq!(glass, vec!["minecraft:glowstone"]);
        let stone: Vec<&str> = table.blocks_with_material(&B1_7_3, "stone").collect();
        assert_eq!(stone, vec!["minecraft:glowstone", "minecraft:stone"]);
    }

    #[test]
    fn material_table_rejects_unknown_versions() {
        let registry = VersionRegistry::standard();
        let json = serde_json::json!({ "minecraft:stone": { "99.1": "stone" } });
        assert!(matches!(
            MaterialTable::from_json(&json, &registry),
            Err(BridgeError::UnresolvedVersion(_))
        ));
    }
}
