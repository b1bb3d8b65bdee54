//! Dark theme: stored preference, body class and the injected stylesheet.

use site_glue_shared::{theme::DARK_THEME_CLASS, SiteConfig, Theme};
use wasm_bindgen::JsValue;
use web_sys::Document;
use yew::AttrValue;

use crate::{
    components::theme_toggle::{ThemeToggle, ThemeToggleProps, THEME_TOGGLE_ID},
    console, dom,
};

const DARK_STYLES_ID: &str = "darkThemeStyles";
const TOGGLE_HOST_ID: &str = "themeToggleHost";

const DARK_THEME_CSS: &str = r#"
body.dark-theme {
    background-color: #121212;
    color: #e0e0e0;
}

body.dark-theme .navbar,
body.dark-theme .feature-card,
body.dark-theme .demo-card,
body.dark-theme .greet-form-container,
body.dark-theme .contact-form-container {
    background-color: #1e1e1e;
    color: #e0e0e0;
}

body.dark-theme .hero {
    background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
}

body.dark-theme .demo {
    background-color: #121212;
}

body.dark-theme .nav-link {
    color: #e0e0e0;
}

body.dark-theme .form-input,
body.dark-theme .form-textarea {
    background-color: #2d2d2d;
    color: #e0e0e0;
    border-color: #444;
}

body.dark-theme .chat-messages {
    background-color: #1a1a1a;
}

body.dark-theme .message.bot .message-content {
    background-color: #2d2d2d;
    border-color: #444;
}
"#;

pub(crate) fn current_theme() -> Theme {
    let is_dark = dom::document()
        .and_then(|doc| doc.body())
        .map(|body| body.class_list().contains(DARK_THEME_CLASS))
        .unwrap_or(false);
    Theme::from_dark(is_dark)
}

pub(crate) fn stored_theme(key: &str) -> Theme {
    let stored = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub(crate) fn save_theme(key: &str, theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
        if let Err(err) = storage.set_item(key, theme.as_str()) {
            console::error("theme: could not persist preference", &err);
        }
    }
}

pub(crate) fn apply_theme(theme: Theme) -> Result<(), JsValue> {
    let Some(body) = dom::document().and_then(|doc| doc.body()) else {
        return Ok(());
    };
    if theme.is_dark() {
        body.class_list().add_1(DARK_THEME_CLASS)
    } else {
        body.class_list().remove_1(DARK_THEME_CLASS)
    }
}

pub(crate) fn install(document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    if stored_theme(&config.theme_storage_key).is_dark() {
        apply_theme(Theme::Dark)?;
    }
    inject_styles(document)?;
    mount_toggle(document, &config.theme_storage_key)
}

fn inject_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(DARK_STYLES_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        console::debug("theme: no <head>, dark styles skipped");
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(DARK_STYLES_ID);
    style.set_text_content(Some(DARK_THEME_CSS));
    head.append_child(&style)?;
    Ok(())
}

/// Render the floating toggle once, even if initialization runs again.
fn mount_toggle(document: &Document, storage_key: &str) -> Result<(), JsValue> {
    if document.get_element_by_id(TOGGLE_HOST_ID).is_some()
        || document.get_element_by_id(THEME_TOGGLE_ID).is_some()
    {
        return Ok(());
    }
    let Some(body) = document.body() else {
        console::debug("theme: no <body>, toggle skipped");
        return Ok(());
    };

    let host = document.create_element("div")?;
    host.set_id(TOGGLE_HOST_ID);
    body.append_child(&host)?;

    yew::Renderer::<ThemeToggle>::with_root_and_props(
        host,
        ThemeToggleProps {
            storage_key: AttrValue::from(storage_key.to_string()),
        },
    )
    .render();
    Ok(())
}
