//! Item Entity
//!
//! One fox picture card plus the URL convention used to reveal its image.

use serde::{Deserialize, Serialize};

/// Which counter a reaction increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }
}

/// A gallery card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identity from the source; not guaranteed dense or unique
    pub id: u32,
    /// Empty until revealed
    pub image_url: String,
    /// Set once, never cleared
    pub revealed: bool,
    pub like_count: u32,
    pub dislike_count: u32,
}

impl Item {
    /// Create an unrevealed item with zero counts
    pub fn new(id: u32) -> Self {
        Self {
            id,
            image_url: String::new(),
            revealed: false,
            like_count: 0,
            dislike_count: 0,
        }
    }

    /// Materialize the image URL. Returns false if already revealed.
    pub fn reveal(&mut self, images: &ImageConvention) -> bool {
        if self.revealed {
            return false;
        }
        self.image_url = images.url_for(self.id);
        self.revealed = true;
        true
    }

    pub fn count(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Like => self.like_count,
            ReactionKind::Dislike => self.dislike_count,
        }
    }

    pub(crate) fn set_count(&mut self, kind: ReactionKind, count: u32) {
        match kind {
            ReactionKind::Like => self.like_count = count,
            ReactionKind::Dislike => self.dislike_count = count,
        }
    }
}

/// External image service naming: `base_url + id + extension`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConvention {
    pub base_url: String,
    pub extension: String,
}

impl ImageConvention {
    pub fn new(base_url: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            extension: extension.into(),
        }
    }

    pub fn url_for(&self, id: u32) -> String {
        format!("{}{}{}", self.base_url, id, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foxes() -> ImageConvention {
        ImageConvention::new("https://randomfox.ca/images/", ".jpg")
    }

    #[test]
    fn test_item_creation() {
        let item = Item::new(7);
        assert_eq!(item.id, 7);
        assert!(item.image_url.is_empty());
        assert!(!item.revealed);
        assert_eq!(item.count(ReactionKind::Like), 0);
    }

    #[test]
    fn test_reveal_once() {
        let mut item = Item::new(12);
        assert!(item.reveal(&foxes()));
        assert_eq!(item.image_url, "https://randomfox.ca/images/12.jpg");
        assert!(!item.reveal(&ImageConvention::new("other/", ".png")));
        assert_eq!(item.image_url, "https://randomfox.ca/images/12.jpg");
    }
}
