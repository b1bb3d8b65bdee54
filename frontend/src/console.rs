use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::JsValue;

static DEBUG: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

/// Diagnostics for skipped behaviors, silent unless enabled in the site config.
pub(crate) fn debug(message: &str) {
    if DEBUG.load(Ordering::Relaxed) {
        web_sys::console::debug_1(&JsValue::from_str(message));
    }
}

pub(crate) fn error(context: &str, err: &JsValue) {
    web_sys::console::error_2(&JsValue::from_str(context), err);
}

/// Log a failed DOM operation and carry on.
pub(crate) fn report(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        error(context, &err);
    }
}
