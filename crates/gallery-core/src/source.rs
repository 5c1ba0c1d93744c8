//! Item Source
//!
//! Turns a fetched payload (or a failed fetch) into the list of item ids.
//! Remote data is expected to look like `[ { "id": 1 }, { "id": 2 }, ... ]`.

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, GalleryResult};

/// Minimal shape of a remote item; extra fields are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: u32,
}

/// Where the installed list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemOrigin {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedItems {
    pub ids: Vec<u32>,
    pub origin: ItemOrigin,
}

/// Sequential ids `1..=count`
pub fn synthesize_fallback(count: u32) -> Vec<u32> {
    (1..=count).collect()
}

/// Validate already-decoded records
pub fn ids_from_records(records: Vec<ItemRecord>) -> GalleryResult<Vec<u32>> {
    if let Some(bad) = records.iter().find(|r| r.id == 0) {
        return Err(GalleryError::SourceUnavailable(format!("invalid item id {}", bad.id)));
    }
    Ok(records.into_iter().map(|r| r.id).collect())
}

/// Parse a JSON array payload into item ids
pub fn parse_payload(json: &str) -> GalleryResult<Vec<u32>> {
    let records: Vec<ItemRecord> = serde_json::from_str(json)
        .map_err(|e| GalleryError::SourceUnavailable(e.to_string()))?;
    ids_from_records(records)
}

/// Use the fetched ids, or the synthesized fallback when the fetch failed
pub fn resolve(fetched: GalleryResult<Vec<u32>>, fallback_count: u32) -> LoadedItems {
    match fetched {
        Ok(ids) => LoadedItems { ids, origin: ItemOrigin::Remote },
        Err(e) => {
            log::warn!(target: "source", "{}, falling back to {} synthesized items", e, fallback_count);
            LoadedItems {
                ids: synthesize_fallback(fallback_count),
                origin: ItemOrigin::Fallback,
            }
        }
    }
}
