//! Diagnostic channel: the browser console.

use std::fmt::Display;

use wasm_bindgen::JsValue;
use web_sys::console;

pub fn error(context: &str, err: impl Display) {
    console::error_1(&JsValue::from_str(&format!("{context}: {err}")));
}

pub fn warn(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}

pub fn debug(message: &str) {
    if cfg!(debug_assertions) {
        console::log_1(&JsValue::from_str(message));
    }
}
