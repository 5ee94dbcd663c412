//! # Named Channels
//!
//! Application-level sub-protocols multiplexed over the custom payload packet.
//!
//! Channels are named either by a namespaced identifier (`minecraft:brand`)
//! or, in pre-namespacing generations, by a bare legacy literal (`MC|Brand`).
//! A bare name without a namespace separator is read in the default
//! `minecraft` namespace, so `brand` and `minecraft:brand` are one channel.

pub mod brand;
pub mod dispatcher;

pub use brand::BrandHandler;
pub use dispatcher::{
    ChannelDispatcher, ConnectionVersions, DispatchOutcome, Dispatched, Direction,
    PayloadContext, PayloadHandler, PostSendListener,
};

use crate::config::BridgeConfig;
use crate::error::Result;
use crate::version::VersionRegistry;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A channel identifier as it appeared on the wire
#[derive(Debug, Clone)]
pub struct ChannelId {
    raw: String,
}

impl ChannelId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }

    /// The identifier with the default namespace filled in when absent or empty
    pub fn namespaced(&self) -> Cow<'_, str> {
        match self.raw.find(':') {
            Some(0) => Cow::Owned(format!("{DEFAULT_NAMESPACE}{}", self.raw)),
            Some(_) => Cow::Borrowed(&self.raw),
            None => Cow::Owned(format!("{DEFAULT_NAMESPACE}:{}", self.raw)),
        }
    }
}

/// Namespaced forms compare equal
impl PartialEq for ChannelId {
    fn eq(&self, other: &Self) -> bool {
        self.namespaced() == other.namespaced()
    }
}

impl Eq for ChannelId {}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for ChannelId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A logical channel: its namespaced identifier plus an optional legacy literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelName {
    pub namespaced: &'static str,
    pub legacy: Option<&'static str>,
}

impl ChannelName {
    pub fn matches(&self, channel: &ChannelId) -> bool {
        channel.namespaced() == self.namespaced
            || self.legacy.is_some_and(|legacy| channel.raw() == legacy)
    }
}

pub const BRAND: ChannelName = ChannelName {
    namespaced: "minecraft:brand",
    legacy: Some("MC|Brand"),
};

/// Handlers enabled by `config`, in dispatch order
pub fn default_handlers(
    config: &BridgeConfig,
    registry: &VersionRegistry,
) -> Result<Vec<Arc<dyn PayloadHandler>>> {
    let mut handlers: Vec<Arc<dyn PayloadHandler>> = Vec::new();
    if config.brand.enabled {
        handlers.push(Arc::new(BrandHandler::from_config(&config.brand, registry)?));
    }
    Ok(handlers)
}
