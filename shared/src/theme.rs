//! Light/dark theme preference persisted in local storage.

use std::str::FromStr;

use thiserror::Error;

/// Default local storage key holding the preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class carried by `<body>` while the dark theme is active.
pub const DARK_THEME_CLASS: &str = "dark-theme";

/// The two visual modes a visitor can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Default look, stored as `"light"`.
    #[default]
    Light,
    /// Dark look, stored as `"dark"`.
    Dark,
}

/// A stored value that is neither `"dark"` nor `"light"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme preference `{0}`")]
pub struct UnknownTheme(pub String);

impl Theme {
    /// Theme matching a `dark-theme` body class state.
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Resolve the stored preference; anything unrecognised falls back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|raw| raw.parse().ok()).unwrap_or_default()
    }

    /// The literal written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Whether this is the dark theme.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome icon shown on the toggle button while this theme is active.
    ///
    /// The icon names the mode a click switches to: a moon in light mode,
    /// a sun in dark mode.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_the_two_literals() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme("Dark".to_string())));
        assert!(" dark".parse::<Theme>().is_err());
    }

    #[test]
    fn stored_value_falls_back_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn toggle_swaps_icon_and_storage_literal() {
        let next = Theme::Light.toggled();
        assert_eq!(next, Theme::Dark);
        assert_eq!(next.as_str(), "dark");
        assert_eq!(next.icon_class(), "fa-sun");
        assert_eq!(next.toggled().icon_class(), "fa-moon");
    }
}
