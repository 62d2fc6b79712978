use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use tecnicas_java_shared::clipboard::{Clipboard, ClipboardError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

/// `navigator.clipboard.writeText`, looked up at call time so browsers
/// without the async clipboard API report [`ClipboardError::Unavailable`].
pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let promise = write_text_promise(text)?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Denied(describe(&err)))
    }
}

fn write_text_promise(text: &str) -> Result<Promise, ClipboardError> {
    let navigator = window().ok_or(ClipboardError::Unavailable)?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|_| ClipboardError::Unavailable)?;
    let write_fn = write_text
        .dyn_ref::<Function>()
        .ok_or(ClipboardError::Unavailable)?;
    let promise_value = write_fn
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|err| ClipboardError::Denied(describe(&err)))?;
    promise_value
        .dyn_into::<Promise>()
        .map_err(|_| ClipboardError::Unavailable)
}

fn describe(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(js_err.message());
    }
    format!("{err:?}")
}
