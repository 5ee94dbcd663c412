//! # Protocol Versions
//!
//! Totally ordered protocol generations and the registry that catalogs them.
//!
//! A [`ProtocolVersion`] is identified by its chronological ordinal. Names are
//! display and lookup keys only; two versions with the same ordinal are equal.
//!
//! ## Components
//! - **ProtocolVersion**: ordered identifier with range predicates
//! - **catalog**: the standard chronological catalog and the named cutoffs used
//!   by the item rule chain
//! - **VersionRegistry**: thread-safe catalog populated at startup, with an
//!   awaitable name lookup for racy initialization orders

pub mod catalog;
pub mod registry;

pub use registry::VersionRegistry;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named, totally ordered point in the wire-protocol evolution
#[derive(Debug, Clone)]
pub struct ProtocolVersion {
    ordinal: u32,
    name: Cow<'static, str>,
    included: &'static [&'static str],
}

impl ProtocolVersion {
    /// Create a version with an owned name and no included aliases
    pub fn new(ordinal: u32, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            ordinal,
            name: name.into(),
            included: &[],
        }
    }

    /// Const constructor used by the standard catalog.
    ///
    /// `included` lists the release names covered by a range version such as
    /// `b1.7-b1.7.3`; they participate in [`ProtocolVersion::matches_name`].
    pub const fn known(
        ordinal: u32,
        name: &'static str,
        included: &'static [&'static str],
    ) -> Self {
        Self {
            ordinal,
            name: Cow::Borrowed(name),
            included,
        }
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive match against the canonical name or any included release
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.name.eq_ignore_ascii_case(name)
            || self.included.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    #[inline]
    pub fn older_than(&self, other: &ProtocolVersion) -> bool {
        self.ordinal < other.ordinal
    }

    #[inline]
    pub fn older_than_or_equal_to(&self, other: &ProtocolVersion) -> bool {
        self.ordinal <= other.ordinal
    }

    #[inline]
    pub fn newer_than(&self, other: &ProtocolVersion) -> bool {
        self.ordinal > other.ordinal
    }

    #[inline]
    pub fn newer_than_or_equal_to(&self, other: &ProtocolVersion) -> bool {
        self.ordinal >= other.ordinal
    }

    /// `low <= self <= high`
    #[inline]
    pub fn between_inclusive(&self, low: &ProtocolVersion, high: &ProtocolVersion) -> bool {
        self.newer_than_or_equal_to(low) && self.older_than_or_equal_to(high)
    }

    /// `low < self < high`
    #[inline]
    pub fn between_exclusive(&self, low: &ProtocolVersion, high: &ProtocolVersion) -> bool {
        self.newer_than(low) && self.older_than(high)
    }
}

impl PartialEq for ProtocolVersion {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

impl Eq for ProtocolVersion {}

impl Hash for ProtocolVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordinal.hash(state);
    }
}

impl PartialOrd for ProtocolVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProtocolVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
