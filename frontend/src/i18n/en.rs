pub mod theme_toggle {
    pub const SWITCH_TO_LIGHT: &str = "Switch to light mode";
    pub const SWITCH_TO_DARK: &str = "Switch to dark mode";
}

pub mod form {
    pub const REQUIRED_FIELD: &str = "This field is required";
}
