//! Fade cards in as they scroll into view.

use std::{cell::RefCell, rc::Rc};

use site_glue_shared::{
    reveal::{self, REVEAL_SELECTOR, REVEAL_TRANSITION, SHOWN_TRANSFORM},
    SiteConfig, Visibility,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::{console, dom};

struct Card {
    element: HtmlElement,
    visibility: Visibility,
}

pub(crate) fn install(document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(win) = web_sys::window() else {
        return Ok(());
    };

    let hidden_transform = reveal::hidden_transform(config.reveal_offset_px);
    let mut cards = Vec::new();
    for element in dom::query_all(document, REVEAL_SELECTOR)? {
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            continue;
        };
        dom::set_styles(
            &element,
            &[
                ("opacity", "0"),
                ("transform", hidden_transform.as_str()),
                ("transition", REVEAL_TRANSITION),
            ],
        )?;
        cards.push(Card {
            element,
            visibility: Visibility::Hidden,
        });
    }
    if cards.is_empty() {
        console::debug("reveal: no cards on this page");
        return Ok(());
    }

    let cards = Rc::new(RefCell::new(cards));
    let divisor = config.reveal_viewport_divisor;
    poll(&win, &mut cards.borrow_mut(), divisor)?;

    let scroll_win = win.clone();
    dom::listen(&win, "scroll", move |_| {
        console::report(
            "reveal: poll failed",
            poll(&scroll_win, &mut cards.borrow_mut(), divisor),
        );
    })
}

/// Show every hidden card that crossed the threshold. Shown cards are left alone.
fn poll(win: &Window, cards: &mut [Card], divisor: f64) -> Result<(), JsValue> {
    let viewport_height = win.inner_height()?.as_f64().unwrap_or(0.0);
    for card in cards.iter_mut().filter(|card| card.visibility == Visibility::Hidden) {
        let top = card.element.get_bounding_client_rect().top();
        card.visibility = card.visibility.observe(top, viewport_height, divisor);
        if card.visibility == Visibility::Shown {
            dom::set_styles(&card.element, &[("opacity", "1"), ("transform", SHOWN_TRANSFORM)])?;
        }
    }
    Ok(())
}
