use site_glue_shared::SiteConfig;
use wasm_bindgen::JsValue;

use crate::console;

// Ids and selectors the server-rendered templates provide.
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ANCHOR_LINK_SELECTOR: &str = r##"a[href^="#"]"##;
pub const VISITOR_COUNT_ID: &str = "visitorCount";

/// Global a page may define to tune the behaviors.
const SITE_CONFIG_GLOBAL: &str = "__SITE_CONFIG__";

/// Read `window.__SITE_CONFIG__`, falling back to defaults when it is absent or malformed.
pub fn load() -> SiteConfig {
    let Some(win) = web_sys::window() else {
        return SiteConfig::default();
    };
    let raw = match js_sys::Reflect::get(&win, &JsValue::from_str(SITE_CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return SiteConfig::default(),
    };

    let json = match js_sys::JSON::stringify(&raw) {
        Ok(json) => String::from(json),
        Err(err) => {
            console::error("site config is not serializable", &err);
            return SiteConfig::default();
        }
    };

    SiteConfig::from_json(&json).unwrap_or_else(|err| {
        console::error("invalid site config", &JsValue::from_str(&err.to_string()));
        SiteConfig::default()
    })
}
