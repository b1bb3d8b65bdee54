//! Scroll-triggered fade-in for cards.

/// Cards that fade in as they scroll into view.
pub const REVEAL_SELECTOR: &str = ".feature-card, .demo-card, .stat-card";

/// Transition applied to every card at load.
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Default fraction divisor of the viewport height a card must cross.
pub const DEFAULT_VIEWPORT_DIVISOR: f64 = 1.2;

/// Default downward offset of a hidden card.
pub const DEFAULT_HIDDEN_OFFSET_PX: f64 = 30.0;

/// Whether a card has been revealed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Transparent and shifted down.
    #[default]
    Hidden,
    /// Fully visible. Never left once entered.
    Shown,
}

impl Visibility {
    /// Next state after observing the card at `element_top` (viewport coordinates).
    pub fn observe(self, element_top: f64, viewport_height: f64, divisor: f64) -> Self {
        match self {
            Visibility::Shown => Visibility::Shown,
            Visibility::Hidden if crosses_threshold(element_top, viewport_height, divisor) => {
                Visibility::Shown
            }
            Visibility::Hidden => Visibility::Hidden,
        }
    }
}

/// True once the card's top is above `viewport_height / divisor`.
pub fn crosses_threshold(element_top: f64, viewport_height: f64, divisor: f64) -> bool {
    element_top < viewport_height / divisor
}

/// `transform` value for a card shifted down by `offset_px`.
pub fn hidden_transform(offset_px: f64) -> String {
    format!("translateY({offset_px}px)")
}

/// `transform` value of a revealed card.
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_viewport_over_divisor() {
        // 960 / 1.2 == 800
        assert!(crosses_threshold(799.0, 960.0, DEFAULT_VIEWPORT_DIVISOR));
        assert!(!crosses_threshold(800.0, 960.0, DEFAULT_VIEWPORT_DIVISOR));
        assert!(crosses_threshold(-400.0, 960.0, DEFAULT_VIEWPORT_DIVISOR));
    }

    #[test]
    fn shown_is_absorbing() {
        let shown = Visibility::Hidden.observe(100.0, 960.0, DEFAULT_VIEWPORT_DIVISOR);
        assert_eq!(shown, Visibility::Shown);
        assert_eq!(shown.observe(5_000.0, 960.0, DEFAULT_VIEWPORT_DIVISOR), Visibility::Shown);
    }

    #[test]
    fn hidden_stays_hidden_below_the_fold() {
        assert_eq!(
            Visibility::Hidden.observe(2_000.0, 960.0, DEFAULT_VIEWPORT_DIVISOR),
            Visibility::Hidden
        );
    }

    #[test]
    fn transform_uses_pixel_offset() {
        assert_eq!(hidden_transform(DEFAULT_HIDDEN_OFFSET_PX), "translateY(30px)");
        assert_eq!(hidden_transform(12.5), "translateY(12.5px)");
    }
}
