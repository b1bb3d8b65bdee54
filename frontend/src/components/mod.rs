// Components rendered into hosts injected by the page behaviors.

pub mod theme_toggle;
