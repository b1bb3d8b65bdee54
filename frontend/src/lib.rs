//! Progressive enhancement for the server-rendered site pages.
//!
//! The pages load this module once; its start function wires the mobile
//! menu, in-page anchor scrolling, active-link highlighting, contact form
//! validation, card fade-ins, the visitor counter and the theme toggle to
//! the DOM. Every behavior is independent: a missing element skips that
//! behavior only, and DOM failures are reported to the console.

mod anchors;
mod components;
mod config;
mod console;
mod counter;
mod dom;
mod forms;
mod i18n;
mod navigation;
mod reveal;
mod theme;

use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Entry point run by wasm-bindgen when the module is instantiated.
///
/// Installs the page behaviors right away when the DOM is already parsed,
/// otherwise on `DOMContentLoaded`.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let target = document.clone();
        let ready = Closure::once(move || init(&document));
        if let Err(err) = target
            .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())
        {
            console::error("start: could not wait for DOMContentLoaded", &err);
        }
        ready.forget();
    } else {
        init(&document);
    }
}

fn init(document: &Document) {
    let config = config::load();
    console::set_debug(config.debug);

    console::report("navigation", navigation::install(document));
    console::report("anchors", anchors::install(document, config.header_offset_px));
    console::report("forms", forms::install(document));
    console::report("reveal", reveal::install(document, &config));
    counter::install(document, &config);
    console::report("theme", theme::install(document, &config));
}
