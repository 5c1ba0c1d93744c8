//! Browser Collaborators
//!
//! Thin wrappers over fetch, localStorage, clipboard and location,
//! organized by concern.

mod clipboard;
mod location;
mod source;
mod storage;

use wasm_bindgen::JsValue;

// Re-export all public items
pub use clipboard::*;
pub use location::*;
pub use source::*;
pub use storage::*;

/// Best-effort message from a rejected promise or thrown value
fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
