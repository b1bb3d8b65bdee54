use site_glue_shared::Theme;
use yew::prelude::*;

use crate::{
    console,
    i18n::current::theme_toggle as t,
    theme::{apply_theme, current_theme, save_theme},
};

pub(crate) const THEME_TOGGLE_ID: &str = "themeToggle";

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeToggleProps {
    pub storage_key: AttrValue,
}

/// Floating button flipping the `dark-theme` body class.
#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps {
        storage_key,
    } = props;
    // The stored preference has already been applied to <body> before mount.
    let theme_state = use_state(current_theme);

    let onclick = {
        let theme_state = theme_state.clone();
        let storage_key = storage_key.clone();
        Callback::from(move |_: MouseEvent| {
            let next = current_theme().toggled();
            if let Err(err) = apply_theme(next) {
                console::error("theme: could not switch theme", &err);
                return;
            }
            save_theme(&storage_key, next);
            theme_state.set(next);
        })
    };

    let theme: Theme = *theme_state;
    let label = if theme.is_dark() { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };

    html! {
        <button
            id={THEME_TOGGLE_ID}
            type="button"
            class={classes!("btn", "btn-small")}
            style="position: fixed; bottom: 20px; right: 20px; z-index: 1000;"
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={theme.is_dark().to_string()}
        >
            <i class={classes!("fas", theme.icon_class())} aria-hidden="true"></i>
        </button>
    }
}
