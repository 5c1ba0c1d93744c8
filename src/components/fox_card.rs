//! Fox Card Component
//!
//! One gallery card: image or placeholder, reaction buttons, share link.

use gallery_core::{Item, ReactionKind};
use leptos::prelude::*;

use crate::context::use_gallery;

/// A single card in the visible window
#[component]
pub fn FoxCard(item: Item) -> impl IntoView {
    let ctx = use_gallery();

    let id = item.id;
    let copied = move || ctx.feedback.with(|feedback| feedback.shown() == Some(id));

    view! {
        <div class="card">
            <h3>{format!("Fox #{}", id)}</h3>

            {if item.revealed {
                view! { <img src=item.image_url.clone() alt=format!("Fox {}", id) /> }.into_any()
            } else {
                view! { <div class="placeholder">"Loading fox..."</div> }.into_any()
            }}

            <div class="actions">
                <button class="like" on:click=move |_| ctx.react(id, ReactionKind::Like)>"Like"</button>
                <span>{item.like_count}</span>
                <button class="dislike" on:click=move |_| ctx.react(id, ReactionKind::Dislike)>"Dislike"</button>
                <span>{item.dislike_count}</span>
            </div>

            <button class="share" on:click=move |_| ctx.copy_link(id)>"Copy Share Link"</button>
            <Show when=copied>
                <div class="copied-msg">"Link copied!"</div>
            </Show>
        </div>
    }
}
