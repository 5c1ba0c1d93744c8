//! View State Store
//!
//! Uses Leptos reactive_stores for the view-only state around the controller.

use gallery_core::ItemOrigin;
use leptos::prelude::*;
use reactive_stores::Store;

/// Where the initial item load stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded { origin: ItemOrigin, count: usize },
}

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    pub load_status: LoadStatus,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_loaded(store: &ViewStore, origin: ItemOrigin, count: usize) {
    store.load_status().set(LoadStatus::Loaded { origin, count });
}

pub fn store_load_status(store: &ViewStore) -> LoadStatus {
    store.load_status().get()
}
