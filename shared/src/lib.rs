//! Browser-independent rules behind the site's page interactions.
//!
//! The wasm frontend reads the DOM, asks these modules what to do, and
//! writes the result back. Nothing here touches browser APIs, so the rules
//! are tested natively.

pub mod anchor;
pub mod config;
pub mod counter;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod validation;

pub use config::SiteConfig;
pub use counter::{CountUp, CounterError, CounterText};
pub use reveal::Visibility;
pub use theme::{Theme, UnknownTheme};
pub use validation::{ErrorNodeAction, FieldState, ValidationReport};
