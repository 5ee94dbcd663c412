//! # Compatibility Rewriting
//!
//! Version-gated repairs applied to converted items.
//!
//! ## Data flow
//! ```text
//! CompatibilityTableLoader -> CompatibilityRuleSet -> ItemDescriptorPatcher
//!        (startup, once)        (immutable, shared)     (per converted item)
//! ```

pub mod blocks;
pub mod patcher;
pub mod rules;
pub mod table;

pub use blocks::{block_refs_to_ids, BlockIdMapping, BlockIdTable, BlockRef, MaterialTable};
pub use patcher::{ItemDescriptorPatcher, ItemPostProcessor, ItemRewriteHooks};
pub use rules::{CompatibilityRuleSet, ToolTable};
pub use table::CompatibilityTableLoader;
