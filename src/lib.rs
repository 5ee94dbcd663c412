//! # version-bridge
//!
//! Version-gated compatibility rewriting for a proxy that sits between a
//! client and a server speaking different generations of the same protocol.
//!
//! The base translation layer converts packets between versions; this crate
//! repairs what plain conversion gets wrong:
//!
//! - [`compat::ItemDescriptorPatcher`] fixes up item data components (stack
//!   sizes, durability, food and tool behavior) for the server's generation.
//! - [`compat::CompatibilityTableLoader`] builds the per-version tool table
//!   from JSON, waiting on a [`version::VersionRegistry`] that may still be
//!   populating.
//! - [`channel::ChannelDispatcher`] routes named-channel payloads to handlers
//!   such as [`channel::BrandHandler`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use version_bridge::compat::{CompatibilityRuleSet, ItemDescriptorPatcher};
//! use version_bridge::item::ItemDescriptor;
//! use version_bridge::version::catalog::B1_7_3;
//!
//! let patcher = ItemDescriptorPatcher::new(Arc::new(CompatibilityRuleSet::default()));
//! let mut apple = ItemDescriptor::new("minecraft:apple");
//! patcher.patch(&mut apple, &B1_7_3);
//! assert_eq!(apple.data().max_stack_size(), Some(1));
//! ```

pub mod channel;
pub mod compat;
pub mod config;
pub mod core;
pub mod error;
pub mod item;
pub mod utils;
pub mod version;

pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use version::{ProtocolVersion, VersionRegistry};
