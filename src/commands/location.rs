//! Page Location
//!
//! Query string for deep links, page base for share URLs, and the optional
//! inline config element.

/// Current `location.search`, e.g. `?fox=27`
pub fn query_string() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// `(origin, pathname)` of the current page
pub fn page_base() -> (String, String) {
    let Some(location) = web_sys::window().map(|window| window.location()) else {
        return (String::new(), "/".to_string());
    };
    (
        location.origin().unwrap_or_default(),
        location.pathname().unwrap_or_else(|_| "/".to_string()),
    )
}

/// Text of `<script id="{id}" type="application/json">`, if present
pub fn inline_json(id: &str) -> Option<String> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.text_content())
}
