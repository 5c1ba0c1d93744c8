//! Gallery Context
//!
//! Shared state provided via Leptos Context API. Components never touch the
//! controller's fields; they call the operations here, and subscribers are
//! notified only when an operation reports a change.

use std::cell::RefCell;

use gallery_core::{
    parse_query, share_url, CopyFeedback, GalleryConfig, GalleryController, GalleryError, GalleryEvent,
    LoadedItems, ReactionKind,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, LocalStore};
use crate::store::{store_set_loaded, ViewState, ViewStore};

thread_local! {
    /// Pending clear of the "copied" confirmation; replacing it cancels the old one
    static PENDING_CLEAR: RefCell<Option<Timeout>> = RefCell::new(None);
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct GalleryContext {
    /// Window controller - read via `with`, mutate via the methods below
    pub controller: RwSignal<GalleryController>,
    /// "Link copied!" confirmation
    pub feedback: RwSignal<CopyFeedback>,
    pub view: ViewStore,
    config: StoredValue<GalleryConfig>,
}

impl GalleryContext {
    pub fn new(config: GalleryConfig, controller: GalleryController) -> Self {
        Self {
            controller: RwSignal::new(controller),
            feedback: RwSignal::new(CopyFeedback::new()),
            view: ViewStore::new(ViewState::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> GalleryConfig {
        self.config.get_value()
    }

    /// Run a controller operation, notifying subscribers only on change
    fn apply(
        &self,
        op: impl FnOnce(&mut GalleryController) -> Option<GalleryEvent>,
    ) -> Option<GalleryEvent> {
        let event = self
            .controller
            .try_maybe_update(|controller| {
                let event = op(controller);
                (event.is_some(), event)
            })
            .flatten();
        if let Some(event) = &event {
            log::debug!(target: "app", "{:?}", event);
        }
        event
    }

    /// Install the resolved item list and honor the startup deep link
    pub fn install(&self, loaded: LoadedItems) {
        let count = loaded.ids.len();
        self.apply(|c| c.install_items(loaded.ids));
        store_set_loaded(&self.view, loaded.origin, count);

        let config = self.config();
        if let Some(value) = parse_query(&commands::query_string(), &config.deep_link_param) {
            if self.apply(|c| c.apply_deep_link(value, config.deep_link_target)).is_none() {
                log::info!(target: "app", "deep link {}={} did not match an item", config.deep_link_param, value);
            }
        }
    }

    pub fn advance(&self) {
        self.apply(GalleryController::advance);
    }

    pub fn retreat(&self) {
        self.apply(GalleryController::retreat);
    }

    pub fn ensure_revealed(&self) {
        self.apply(GalleryController::ensure_revealed);
    }

    /// Add a reaction and write the ledger back
    pub fn react(&self, id: u32, kind: ReactionKind) {
        self.apply(|c| c.react(id, kind));
        let keys = self.config.with_value(|config| config.ledger_keys());
        let saved = self
            .controller
            .with_untracked(|c| c.ledger().persist(&LocalStore, &keys));
        if let Err(e) = saved {
            log::error!(target: "ledger", "{}", e);
        }
    }

    /// Copy the share URL for `id` and show the confirmation on success
    pub fn copy_link(&self, id: u32) {
        let ctx = *self;
        let param = self.config.with_value(|config| config.deep_link_param.clone());
        let (origin, pathname) = commands::page_base();
        let url = share_url(&origin, &pathname, &param, id);
        spawn_local(async move {
            match commands::write_text(&url).await {
                Ok(()) => ctx.show_copied(id),
                Err(e) => log::error!(target: "clipboard", "{}", GalleryError::ClipboardDenied(e)),
            }
        });
    }

    fn show_copied(&self, id: u32) {
        let Some(ticket) = self.feedback.try_update(|feedback| feedback.begin(id)) else {
            return;
        };
        let feedback = self.feedback;
        let delay = self.config.with_value(|config| config.copied_clear_ms);
        let timer = Timeout::new(delay, move || {
            feedback.maybe_update(|feedback| feedback.expire(ticket));
        });
        PENDING_CLEAR.with(|slot| slot.replace(Some(timer)));
    }
}

/// Get the gallery context
pub fn use_gallery() -> GalleryContext {
    expect_context::<GalleryContext>()
}
