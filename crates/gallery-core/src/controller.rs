//! Gallery Window Controller
//!
//! Owns the item list, the window offset and the reaction ledger. Every
//! mutating operation returns `Some(GalleryEvent)` when state changed and
//! `None` when it was a no-op, so the rendering layer redraws only on change.

use crate::config::GalleryConfig;
use crate::deep_link::DeepLinkTarget;
use crate::error::{GalleryError, GalleryResult};
use crate::item::{ImageConvention, Item, ReactionKind};
use crate::ledger::ReactionLedger;
use crate::policy::PagingPolicy;

/// State-change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    ItemsLoaded { count: usize },
    Moved { from: usize, to: usize },
    Revealed { count: usize },
    Reacted { id: u32, kind: ReactionKind, count: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryController {
    items: Vec<Item>,
    offset: usize,
    page_size: usize,
    policy: PagingPolicy,
    images: ImageConvention,
    ledger: ReactionLedger,
}

impl Default for GalleryController {
    fn default() -> Self {
        Self::from_valid_config(&GalleryConfig::default())
    }
}

impl GalleryController {
    /// Empty controller; items arrive later via `install_items`
    pub fn new(config: &GalleryConfig) -> GalleryResult<Self> {
        if config.page_size == 0 {
            return Err(GalleryError::InvalidConfig("page_size must be at least 1".into()));
        }
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &GalleryConfig) -> Self {
        Self {
            items: Vec::new(),
            offset: 0,
            page_size: config.page_size,
            policy: config.policy,
            images: ImageConvention::new(&config.image_base_url, &config.image_extension),
            ledger: ReactionLedger::new(),
        }
    }

    pub fn with_ledger(mut self, ledger: ReactionLedger) -> Self {
        self.ledger = ledger;
        self.hydrate_counts();
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn policy(&self) -> PagingPolicy {
        self.policy
    }

    pub fn ledger(&self) -> &ReactionLedger {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the item list once the source resolves. Resets the window.
    pub fn install_items(&mut self, ids: impl IntoIterator<Item = u32>) -> Option<GalleryEvent> {
        self.items = ids.into_iter().map(Item::new).collect();
        self.offset = 0;
        self.hydrate_counts();
        log::info!(target: "gallery", "installed {} items", self.items.len());
        Some(GalleryEvent::ItemsLoaded { count: self.items.len() })
    }

    fn hydrate_counts(&mut self) {
        for item in &mut self.items {
            item.like_count = self.ledger.likes(item.id);
            item.dislike_count = self.ledger.dislikes(item.id);
        }
    }

    /// Items in `[offset, min(offset + page_size, len))`
    pub fn visible_slice(&self) -> &[Item] {
        let start = self.offset.min(self.items.len());
        let end = start.saturating_add(self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    fn move_to(&mut self, to: usize) -> Option<GalleryEvent> {
        let from = self.offset;
        if from == to {
            return None;
        }
        self.offset = to;
        log::debug!(target: "gallery", "window {} -> {}", from, to);
        Some(GalleryEvent::Moved { from, to })
    }

    pub fn advance(&mut self) -> Option<GalleryEvent> {
        let next = self.policy.next_offset(self.offset, self.page_size, self.items.len());
        self.move_to(next)
    }

    pub fn retreat(&mut self) -> Option<GalleryEvent> {
        let prev = self.policy.prev_offset(self.offset, self.page_size, self.items.len());
        self.move_to(prev)
    }

    pub fn can_advance(&self) -> bool {
        self.policy.can_advance(self.offset, self.page_size, self.items.len())
    }

    pub fn can_retreat(&self) -> bool {
        self.policy.can_retreat(self.offset, self.items.len())
    }

    /// List position of the first item with `id`
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Start the window at the item with `id`. Unknown ids are ignored.
    pub fn jump_to(&mut self, id: u32) -> Option<GalleryEvent> {
        match self.position_of(id) {
            Some(position) => self.move_to(position),
            None => {
                log::debug!(target: "gallery", "{}, deep link ignored", GalleryError::UnknownId(id));
                None
            }
        }
    }

    /// Start the window at 1-based `position`. Out-of-range values are ignored.
    pub fn jump_to_position(&mut self, position: u32) -> Option<GalleryEvent> {
        let position = position as usize;
        if position == 0 || position > self.items.len() {
            return None;
        }
        self.move_to(position - 1)
    }

    pub fn apply_deep_link(&mut self, value: u32, target: DeepLinkTarget) -> Option<GalleryEvent> {
        match target {
            DeepLinkTarget::ItemId => self.jump_to(value),
            DeepLinkTarget::Position => self.jump_to_position(value),
        }
    }

    /// Materialize image URLs for every unrevealed item in the window
    pub fn ensure_revealed(&mut self) -> Option<GalleryEvent> {
        let start = self.offset.min(self.items.len());
        let end = start.saturating_add(self.page_size).min(self.items.len());
        let images = &self.images;
        let count = self.items[start..end]
            .iter_mut()
            .map(|item| item.reveal(images))
            .filter(|&revealed| revealed)
            .count();
        if count == 0 {
            return None;
        }
        log::debug!(target: "gallery", "revealed {} images at offset {}", count, self.offset);
        Some(GalleryEvent::Revealed { count })
    }

    /// Add one like or dislike for `id`
    pub fn react(&mut self, id: u32, kind: ReactionKind) -> Option<GalleryEvent> {
        let count = self.ledger.react(id, kind);
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.set_count(kind, count);
        }
        Some(GalleryEvent::Reacted { id, kind, count })
    }
}
