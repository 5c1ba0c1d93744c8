//! Gallery Navigation
//!
//! Previous/next window buttons, disabled at the ends under the clamped policy.

use leptos::prelude::*;

use crate::context::use_gallery;

#[component]
pub fn GalleryNav() -> impl IntoView {
    let ctx = use_gallery();

    let prev_disabled = move || ctx.controller.with(|c| !c.can_retreat());
    let next_disabled = move || ctx.controller.with(|c| !c.can_advance());

    view! {
        <div class="nav">
            <button class="nav-btn" title="Previous" on:click=move |_| ctx.retreat() disabled=prev_disabled>
                "⟨"
            </button>
            <button class="nav-btn" title="Next" on:click=move |_| ctx.advance() disabled=next_disabled>
                "⟩"
            </button>
        </div>
    }
}
