//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. Fire-and-forget: errors are swallowed and no
//! success indication is surfaced.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard
///
/// # Example
/// ```no_run
/// use frontend::shared::clipboard::copy_to_clipboard;
/// copy_to_clipboard("fn main() {}");
/// ```
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await;
        }
    });
}
