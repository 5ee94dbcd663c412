//! # Version Registry
//!
//! Thread-safe catalog of known protocol versions.
//!
//! The registry may still be filling up on another thread while the
//! compatibility tables load. Instead of polling, every registration bumps a
//! `tokio::sync::watch` generation counter and [`VersionRegistry::wait_for`]
//! re-checks the catalog each time it changes, bounded by a timeout.

use super::{catalog, ProtocolVersion};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, trace};

pub struct VersionRegistry {
    versions: RwLock<Vec<ProtocolVersion>>,
    generation: watch::Sender<u64>,
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            versions: RwLock::new(Vec::new()),
            generation,
        }
    }

    /// Create a registry pre-populated with [`catalog::STANDARD`]
    pub fn standard() -> Self {
        let registry = Self::new();
        registry.register_all(catalog::STANDARD.iter().cloned());
        registry
    }

    /// Add a version, replacing any existing entry with the same ordinal
    pub fn register(&self, version: ProtocolVersion) {
        {
            let mut versions = self.write();
            match versions.binary_search(&version) {
                Ok(index) => versions[index] = version.clone(),
                Err(index) => versions.insert(index, version.clone()),
            }
        }
        trace!(version = %version, "Registered protocol version");
        self.generation.send_modify(|generation| *generation += 1);
    }

    pub fn register_all<I>(&self, versions: I)
    where
        I: IntoIterator<Item = ProtocolVersion>,
    {
        let mut added = 0usize;
        {
            let mut guard = self.write();
            for version in versions {
                match guard.binary_search(&version) {
                    Ok(index) => guard[index] = version,
                    Err(index) => guard.insert(index, version),
                }
                added += 1;
            }
        }
        debug!(added, "Registered protocol versions");
        self.generation.send_modify(|generation| *generation += 1);
    }

    /// Resolve a version name (canonical or included release), case-insensitively
    pub fn closest_match(&self, name: &str) -> Option<ProtocolVersion> {
        self.read()
            .iter()
            .find(|version| version.matches_name(name))
            .cloned()
    }

    /// Wait until `name` becomes resolvable or `timeout` elapses.
    ///
    /// Returns immediately when the name already resolves.
    pub async fn wait_for(&self, name: &str, timeout: Duration) -> Option<ProtocolVersion> {
        let mut changes = self.generation.subscribe();
        let lookup = async {
            loop {
                changes.borrow_and_update();
                if let Some(version) = self.closest_match(name) {
                    return Some(version);
                }
                if changes.changed().await.is_err() {
                    return None;
                }
            }
        };

        tokio::time::timeout(timeout, lookup).await.ok().flatten()
    }

    /// Snapshot of every registered version in ascending order
    pub fn versions(&self) -> Vec<ProtocolVersion> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ProtocolVersion>> {
        self.versions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ProtocolVersion>> {
        self.versions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::version::catalog::{B1_7_3, V1_20, V1_8};
    use std::sync::Arc;

    #[test]
    fn closest_match_resolves_aliases() {
        let registry = VersionRegistry::standard();
        assert_eq!(registry.closest_match("b1.7.3"), Some(B1_7_3));
        assert_eq!(registry.closest_match("1.8"), Some(V1_8));
        assert_eq!(registry.closest_match("1.20.1"), Some(V1_20));
        assert_eq!(registry.closest_match("2.0"), None);
    }

    #[test]
    fn register_keeps_ascending_order() {
        let registry = VersionRegistry::new();
        registry.register(V1_20);
        registry.register(B1_7_3);
        registry.register(V1_8);
        registry.register(V1_8);

        let ordinals: Vec<u32> = registry.versions().iter().map(|v| v.ordinal()).collect();
        assert_eq!(ordinals, vec![B1_7_3.ordinal(), V1_8.ordinal(), V1_20.ordinal()]);
    }

    #[tokio::test]
    async fn wait_for_returns_once_registered() {
        let registry = Arc::new(VersionRegistry::new());

        let populate = {
            let registry = registry.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                registry.register(V1_8);
            })
        };

        let found = registry.wait_for("1.8.9", Duration::from_secs(5)).await;
        assert_eq!(found, Some(V1_8));
        populate.await.unwrap();
    }

    #[tokio::test]
    async fn wait_for_times_out() {
        let registry = VersionRegistry::standard();
        let found = registry
            .wait_for("9.9.9", Duration::from_millis(30))
            .await;
        assert!(found.is_none());
    }
}
