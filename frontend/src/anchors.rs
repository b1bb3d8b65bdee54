//! Smooth scrolling for in-page links, clearing the fixed header.

use site_glue_shared::anchor;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions};

use crate::{config::ANCHOR_LINK_SELECTOR, console, dom, navigation::MobileNav};

pub(crate) fn install(document: &Document, header_offset: f64) -> Result<(), JsValue> {
    let mobile_nav = MobileNav::find(document);

    for link in dom::query_all(document, ANCHOR_LINK_SELECTOR)? {
        let document = document.clone();
        let mobile_nav = mobile_nav.clone();
        dom::listen(&link.clone(), "click", move |event: Event| {
            console::report(
                "anchors: scroll failed",
                on_click(&document, &link, mobile_nav.as_ref(), header_offset, &event),
            );
        })?;
    }
    Ok(())
}

fn on_click(
    document: &Document,
    link: &Element,
    mobile_nav: Option<&MobileNav>,
    header_offset: f64,
    event: &Event,
) -> Result<(), JsValue> {
    // Read at click time so templates may rewrite hrefs after load.
    let Some(href) = link.get_attribute("href") else {
        return Ok(());
    };
    let Some(id) = anchor::target_id(&href) else {
        return Ok(());
    };
    let Some(target) = document.get_element_by_id(id) else {
        return Ok(());
    };

    event.prevent_default();

    if let Some(nav) = mobile_nav.filter(|nav| nav.is_open()) {
        nav.close()?;
    }

    let Some(win) = web_sys::window() else {
        return Ok(());
    };
    let document_top = target.get_bounding_client_rect().top() + win.scroll_y()?;

    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_top(anchor::scroll_top_for(document_top, header_offset));
    win.scroll_with_scroll_to_options(&options);
    Ok(())
}
