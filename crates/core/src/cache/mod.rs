//! In-memory cache of extracted fragments.
//!
//! Entries are written once per key after a successful extraction and stay
//! until [`FragmentCache::clear`] is called. Nothing is persisted.
//!
//! The handle is cheap to clone; clones share the same map, so a clone kept
//! outside the loader can invalidate what the loader sees.

pub mod key;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub use key::FragmentKey;

/// Shared fragment cache.
///
/// Uses a HashMap behind a tokio RwLock for concurrent fragment loads.
#[derive(Clone, Debug, Default)]
pub struct FragmentCache {
    entries: Arc<RwLock<HashMap<FragmentKey, String>>>,
}

impl FragmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a fragment without touching the network.
    pub async fn get(&self, key: &FragmentKey) -> Option<String> {
        let entries = self.entries.read().await;
        entries.get(key).cloned()
    }

    /// Store an extracted fragment, replacing any earlier value for the key.
    pub async fn insert(&self, key: FragmentKey, markup: String) {
        let mut entries = self.entries.write().await;
        entries.insert(key, markup);
    }

    pub async fn contains(&self, key: &FragmentKey) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Rendered keys of all cached fragments, sorted.
    pub async fn keys(&self) -> Vec<String> {
        let entries = self.entries.read().await;
        let mut keys: Vec<String> = entries.keys().map(ToString::to_string).collect();
        keys.sort();
        keys
    }

    /// Drop every entry. Returns how many were removed.
    pub async fn clear(&self) -> usize {
        let mut entries = self.entries.write().await;
        let removed = entries.len();
        entries.clear();
        tracing::info!(removed, "fragment cache cleared");
        removed
    }
}
