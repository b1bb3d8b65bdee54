//! Mobile menu toggle and active-link highlighting.

use site_glue_shared::nav::{self, MenuState, ACTIVE_LINK_CLASS, MENU_OPEN_CLASS};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::{
    config::{NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID},
    console, dom,
};

/// The hamburger button and the menu it controls.
#[derive(Clone)]
pub(crate) struct MobileNav {
    toggle: Element,
    menu: Element,
}

impl MobileNav {
    pub(crate) fn find(document: &Document) -> Option<Self> {
        Some(Self {
            toggle: document.get_element_by_id(NAV_TOGGLE_ID)?,
            menu: document.get_element_by_id(NAV_MENU_ID)?,
        })
    }

    pub(crate) fn is_open(&self) -> bool {
        self.menu.class_list().contains(MENU_OPEN_CLASS)
    }

    fn toggle(&self) -> Result<(), JsValue> {
        self.apply(MenuState::from_open(self.is_open()).toggled())
    }

    pub(crate) fn close(&self) -> Result<(), JsValue> {
        self.apply(MenuState::closed())
    }

    fn apply(&self, state: MenuState) -> Result<(), JsValue> {
        self.menu
            .class_list()
            .toggle_with_force(MENU_OPEN_CLASS, state.open)?;
        self.toggle
            .set_inner_html(&nav::icon_markup(state.icon_class));
        Ok(())
    }
}

pub(crate) fn install(document: &Document) -> Result<(), JsValue> {
    let links = dom::query_all(document, NAV_LINK_SELECTOR)?;
    mark_active_links(&links)?;

    let Some(mobile_nav) = MobileNav::find(document) else {
        console::debug("navigation: #navToggle or #navMenu missing, menu toggle skipped");
        return Ok(());
    };

    {
        let mobile_nav = mobile_nav.clone();
        dom::listen(&mobile_nav.toggle.clone(), "click", move |_| {
            console::report("navigation: toggle failed", mobile_nav.toggle());
        })?;
    }

    for link in &links {
        let mobile_nav = mobile_nav.clone();
        dom::listen(link, "click", move |_| {
            console::report("navigation: close failed", mobile_nav.close());
        })?;
    }
    Ok(())
}

fn mark_active_links(links: &[Element]) -> Result<(), JsValue> {
    let Some(path) = dom::current_path() else {
        return Ok(());
    };
    for link in links {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if nav::is_active_link(&path, &href) {
            link.class_list().add_1(ACTIVE_LINK_CLASS)?;
        }
    }
    Ok(())
}
