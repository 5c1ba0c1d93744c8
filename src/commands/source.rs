//! Item Source Fetch
//!
//! GET the configured JSON endpoint and decode it into item records.

use gallery_core::ItemRecord;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::js_error;

/// Fetch `url` and decode a JSON array of `{ "id": n, ... }` objects
pub async fn fetch_items(url: &str) -> Result<Vec<ItemRecord>, String> {
    let window = web_sys::window().ok_or("no window")?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(format!("GET {} returned HTTP {}", url, response.status()));
    }

    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    if !js_sys::Array::is_array(&json) {
        return Err(format!("GET {} did not return an array", url));
    }

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("Failed to parse items: {}", e))
}
