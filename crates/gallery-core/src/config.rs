//! Gallery Configuration
//!
//! Every field has a default, so a partial JSON document is enough.

use serde::{Deserialize, Serialize};

use crate::deep_link::DeepLinkTarget;
use crate::error::{GalleryError, GalleryResult};
use crate::ledger::LedgerKeys;
use crate::policy::PagingPolicy;

/// Gallery settings, fixed for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Visible window width
    pub page_size: usize,
    pub policy: PagingPolicy,
    /// JSON endpoint for the item list (None = always use fallback)
    pub source_url: Option<String>,
    /// Number of synthesized items when the source is unavailable
    pub fallback_count: u32,
    pub image_base_url: String,
    pub image_extension: String,
    /// Query parameter used for share links
    pub deep_link_param: String,
    pub deep_link_target: DeepLinkTarget,
    /// Delay before the "copied" confirmation clears
    pub copied_clear_ms: u32,
    /// Prefix for the persisted ledger keys
    pub storage_prefix: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            policy: PagingPolicy::Clamped,
            source_url: Some("/foxes.json".to_string()),
            fallback_count: 51,
            image_base_url: "https://randomfox.ca/images/".to_string(),
            image_extension: ".jpg".to_string(),
            deep_link_param: "fox".to_string(),
            deep_link_target: DeepLinkTarget::ItemId,
            copied_clear_ms: 1500,
            storage_prefix: "fox-gallery".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> GalleryResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GalleryError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GalleryResult<()> {
        if self.page_size == 0 {
            return Err(GalleryError::InvalidConfig("page_size must be at least 1".into()));
        }
        if self.deep_link_param.trim().is_empty() {
            return Err(GalleryError::InvalidConfig("deep_link_param is empty".into()));
        }
        if self.storage_prefix.trim().is_empty() {
            return Err(GalleryError::InvalidConfig("storage_prefix is empty".into()));
        }
        Ok(())
    }

    pub fn ledger_keys(&self) -> LedgerKeys {
        LedgerKeys::with_prefix(&self.storage_prefix)
    }
}
