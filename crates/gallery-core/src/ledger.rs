//! Reaction Ledger
//!
//! Like/dislike counts keyed by item id, independent of the item list.
//! Persisted as two JSON objects (`{"27": 3}`) in a key-value store.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use crate::error::{GalleryError, GalleryResult};
use crate::item::ReactionKind;

/// String key-value persistence (browser localStorage, or memory in tests)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> GalleryResult<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> GalleryResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage keys for the two mappings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerKeys {
    pub likes: String,
    pub dislikes: String,
}

impl LedgerKeys {
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            likes: format!("{}.likes", prefix),
            dislikes: format!("{}.dislikes", prefix),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionLedger {
    likes: BTreeMap<u32, u32>,
    dislikes: BTreeMap<u32, u32>,
}

impl ReactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: ReactionKind) -> &BTreeMap<u32, u32> {
        match kind {
            ReactionKind::Like => &self.likes,
            ReactionKind::Dislike => &self.dislikes,
        }
    }

    /// Add one reaction and return the new count. Unknown ids start at 0.
    pub fn react(&mut self, id: u32, kind: ReactionKind) -> u32 {
        let map = match kind {
            ReactionKind::Like => &mut self.likes,
            ReactionKind::Dislike => &mut self.dislikes,
        };
        let count = map.entry(id).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn count(&self, id: u32, kind: ReactionKind) -> u32 {
        self.map(kind).get(&id).copied().unwrap_or(0)
    }

    pub fn likes(&self, id: u32) -> u32 {
        self.count(id, ReactionKind::Like)
    }

    pub fn dislikes(&self, id: u32) -> u32 {
        self.count(id, ReactionKind::Dislike)
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_empty() && self.dislikes.is_empty()
    }

    /// Load both mappings. Missing or malformed data yields an empty mapping.
    pub fn load(store: &impl KeyValueStore, keys: &LedgerKeys) -> Self {
        Self {
            likes: load_map(store, &keys.likes),
            dislikes: load_map(store, &keys.dislikes),
        }
    }

    /// Write both mappings back
    pub fn persist(&self, store: &impl KeyValueStore, keys: &LedgerKeys) -> GalleryResult<()> {
        store.set(&keys.likes, &encode_map(&self.likes)?)?;
        store.set(&keys.dislikes, &encode_map(&self.dislikes)?)?;
        log::debug!(
            target: "ledger",
            "persisted {} like / {} dislike entries",
            self.likes.len(),
            self.dislikes.len()
        );
        Ok(())
    }
}

fn encode_map(map: &BTreeMap<u32, u32>) -> GalleryResult<String> {
    serde_json::to_string(map).map_err(|e| GalleryError::Storage(e.to_string()))
}

fn decode_map(raw: &str) -> GalleryResult<BTreeMap<u32, u32>> {
    serde_json::from_str(raw).map_err(|e| GalleryError::MalformedPersistedLedger(e.to_string()))
}

fn load_map(store: &impl KeyValueStore, key: &str) -> BTreeMap<u32, u32> {
    let Some(raw) = store.get(key) else {
        return BTreeMap::new();
    };
    match decode_map(&raw) {
        Ok(map) => map,
        Err(e) => {
            log::warn!(target: "ledger", "{} ({}), starting empty", e, key);
            BTreeMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> LedgerKeys {
        LedgerKeys::with_prefix("test")
    }

    #[test]
    fn test_react_counts_exactly() {
        let mut ledger = ReactionLedger::new();
        for _ in 0..4 {
            ledger.react(3, ReactionKind::Like);
        }
        assert_eq!(ledger.likes(3), 4);
        assert_eq!(ledger.dislikes(3), 0);
        assert_eq!(ledger.likes(4), 0);
    }

    #[test]
    fn test_unknown_id_starts_at_one() {
        let mut ledger = ReactionLedger::new();
        assert_eq!(ledger.react(999, ReactionKind::Dislike), 1);
        assert_eq!(ledger.react(998, ReactionKind::Like), 1);
    }

    #[test]
    fn test_persist_and_reload() {
        let store = MemoryStore::new();
        let mut ledger = ReactionLedger::new();
        ledger.react(27, ReactionKind::Like);
        ledger.react(27, ReactionKind::Like);
        ledger.react(2, ReactionKind::Dislike);
        ledger.persist(&store, &keys()).unwrap();

        assert_eq!(store.get("test.likes").as_deref(), Some(r#"{"27":2}"#));

        let reloaded = ReactionLedger::load(&store, &keys());
        assert_eq!(reloaded, ledger);
    }

    #[test]
    fn test_absent_data_is_empty() {
        let ledger = ReactionLedger::load(&MemoryStore::new(), &keys());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_malformed_mapping_is_empty() {
        let store = MemoryStore::new();
        store.set("test.likes", "{not json").unwrap();
        store.set("test.dislikes", r#"{"5":3}"#).unwrap();

        let ledger = ReactionLedger::load(&store, &keys());
        assert_eq!(ledger.likes(5), 0);
        assert_eq!(ledger.dislikes(5), 3);
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        assert!(matches!(
            decode_map(r#"[1, 2, 3]"#),
            Err(GalleryError::MalformedPersistedLedger(_))
        ));
        assert!(decode_map(r#"{"x": 1}"#).is_err());
    }
}
