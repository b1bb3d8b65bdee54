//! Mobile navigation menu state and active-link matching.

/// Class on `#navMenu` while the mobile menu is open.
pub const MENU_OPEN_CLASS: &str = "active";

/// Class added to `.nav-link` elements pointing at the current page.
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Icon shown on the toggle button for a given menu state.
pub fn toggle_icon_class(menu_open: bool) -> &'static str {
    if menu_open {
        "fa-times"
    } else {
        "fa-bars"
    }
}

/// Open state of the mobile menu together with the icon its toggle shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    /// Whether `#navMenu` carries the open class.
    pub open: bool,
    /// Icon class rendered inside `#navToggle`.
    pub icon_class: &'static str,
}

impl MenuState {
    /// State for a menu that is currently `open` or not.
    pub fn from_open(open: bool) -> Self {
        Self {
            open,
            icon_class: toggle_icon_class(open),
        }
    }

    /// State after a link click or anchor scroll.
    pub fn closed() -> Self {
        Self::from_open(false)
    }

    /// State after clicking the toggle button.
    pub fn toggled(self) -> Self {
        Self::from_open(!self.open)
    }
}

/// Inline markup for a Font Awesome solid icon.
pub fn icon_markup(icon_class: &str) -> String {
    format!(r#"<i class="fas {icon_class}"></i>"#)
}

/// Whether a nav link should be highlighted for `current_path`.
///
/// Exact matches always count. Prefix matches count unless the link is the
/// site root, which would otherwise match every page.
pub fn is_active_link(current_path: &str, link_href: &str) -> bool {
    if link_href.is_empty() {
        return false;
    }
    current_path == link_href || (link_href != "/" && current_path.starts_with(link_href))
}
