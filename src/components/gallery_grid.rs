//! Gallery Grid Component
//!
//! Renders the controller's visible slice.

use gallery_core::Item;
use leptos::prelude::*;

use crate::components::FoxCard;
use crate::context::use_gallery;

#[component]
pub fn GalleryGrid() -> impl IntoView {
    let ctx = use_gallery();

    // Keyed by list position plus the card's mutable fields, so ids need not be unique
    let cards = move || {
        ctx.controller.with(|c| {
            let offset = c.offset();
            c.visible_slice()
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, item)| (offset + i, item))
                .collect::<Vec<(usize, Item)>>()
        })
    };

    view! {
        <div class="gallery">
            <For
                each=cards
                key=|(position, item)| (*position, item.revealed, item.like_count, item.dislike_count)
                children=move |(_, item)| view! { <FoxCard item=item /> }
            />
        </div>
    }
}
