//! Gallery Core
//!
//! Framework-independent pieces of the fox gallery:
//! - controller: window offset, paging and lazy image reveal
//! - ledger: persisted like/dislike counts
//! - source: item list resolution with synthesized fallback
//! - deep_link / copy_feedback: share-link plumbing

mod config;
mod controller;
mod copy_feedback;
mod deep_link;
mod error;
mod item;
mod ledger;
mod policy;
mod source;

#[cfg(test)]
mod tests;

pub use config::GalleryConfig;
pub use controller::{GalleryController, GalleryEvent};
pub use copy_feedback::{CopyFeedback, CopyTicket};
pub use deep_link::{parse_query, share_url, DeepLinkTarget};
pub use error::{GalleryError, GalleryResult};
pub use item::{ImageConvention, Item, ReactionKind};
pub use ledger::{KeyValueStore, LedgerKeys, MemoryStore, ReactionLedger};
pub use policy::PagingPolicy;
pub use source::{ids_from_records, parse_payload, resolve, synthesize_fallback, ItemOrigin, ItemRecord, LoadedItems};
