//! Page Configuration
//!
//! Reads `<script id="gallery-config" type="application/json">` if the page
//! provides one; otherwise uses the built-in defaults.

use gallery_core::GalleryConfig;

use crate::commands;

const CONFIG_ELEMENT_ID: &str = "gallery-config";

pub fn load_config() -> GalleryConfig {
    let Some(raw) = commands::inline_json(CONFIG_ELEMENT_ID) else {
        return GalleryConfig::default();
    };
    match GalleryConfig::from_json(&raw) {
        Ok(config) => {
            log::info!(
                target: "config",
                "page_size={} policy={} source={:?}",
                config.page_size,
                config.policy.as_str(),
                config.source_url
            );
            config
        }
        Err(e) => {
            log::warn!(target: "config", "{}, using defaults", e);
            GalleryConfig::default()
        }
    }
}
