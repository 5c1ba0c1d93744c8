//! UI Components
//!
//! Leptos components for the gallery surface.

mod fox_card;
mod gallery_grid;
mod gallery_nav;

pub use fox_card::FoxCard;
pub use gallery_grid::GalleryGrid;
pub use gallery_nav::GalleryNav;
