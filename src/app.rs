//! Fox Gallery App
//!
//! Root component: builds the controller, starts the item load and drives
//! lazy image reveal from the window position.

use gallery_core::{
    ids_from_records, resolve, synthesize_fallback, GalleryConfig, GalleryController, GalleryError,
    ItemOrigin, LoadedItems, ReactionLedger,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, LocalStore};
use crate::components::{GalleryGrid, GalleryNav};
use crate::config::load_config;
use crate::context::GalleryContext;
use crate::store::{store_load_status, LoadStatus};

/// Fetch the configured source, or synthesize the fallback list
async fn load_items(config: &GalleryConfig) -> LoadedItems {
    let Some(url) = config.source_url.as_deref() else {
        log::info!(target: "app", "no item source configured, using {} synthesized items", config.fallback_count);
        return LoadedItems {
            ids: synthesize_fallback(config.fallback_count),
            origin: ItemOrigin::Fallback,
        };
    };
    let fetched = commands::fetch_items(url)
        .await
        .map_err(GalleryError::SourceUnavailable)
        .and_then(ids_from_records);
    resolve(fetched, config.fallback_count)
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let ledger = ReactionLedger::load(&LocalStore, &config.ledger_keys());
    let controller = GalleryController::new(&config)
        .unwrap_or_else(|e| {
            log::warn!(target: "app", "{}, using default controller", e);
            GalleryController::default()
        })
        .with_ledger(ledger);

    let ctx = GalleryContext::new(config.clone(), controller);
    provide_context(ctx);

    // Load items once on mount
    spawn_local(async move {
        let loaded = load_items(&config).await;
        log::info!(target: "app", "loaded {} items ({:?})", loaded.ids.len(), loaded.origin);
        ctx.install(loaded);
    });

    // Reveal once per window move, not per render
    let window = Memo::new(move |_| ctx.controller.with(|c| (c.offset(), c.len())));
    Effect::new(move |_| {
        window.track();
        ctx.ensure_revealed();
    });

    let status = move || match store_load_status(&ctx.view) {
        LoadStatus::Loading => "Loading foxes...".to_string(),
        LoadStatus::Loaded { count, origin: ItemOrigin::Remote } => format!("{} foxes", count),
        LoadStatus::Loaded { count, origin: ItemOrigin::Fallback } => format!("{} foxes (offline set)", count),
    };

    view! {
        <div class="gallery-app">
            <header>"Some Random Foxes"</header>
            <GalleryNav />
            <GalleryGrid />
            <p class="item-count">{status}</p>
        </div>
    }
}
