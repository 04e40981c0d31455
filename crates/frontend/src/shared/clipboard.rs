//! Clipboard access through the async Web Clipboard API.

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy `text` and report the outcome to `on_done`.
///
/// The clipboard is unavailable outside secure contexts; that case is
/// reported as an error instead of being swallowed.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), String>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            on_done(Err("No window".to_string()));
            return;
        };
        let clipboard = window.navigator().clipboard();
        let result = JsFuture::from(clipboard.write_text(&text))
            .await
            .map(|_| ())
            .map_err(|e| format!("Clipboard write failed: {:?}", e));
        on_done(result);
    });
}
