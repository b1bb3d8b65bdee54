//! In-page anchor resolution and header-aware scroll positions.

/// Height of the fixed header the scroll target has to clear.
pub const DEFAULT_HEADER_OFFSET_PX: f64 = 80.0;

/// Element id an in-page link points at.
///
/// Returns `None` for the bare `"#"` placeholder and for hrefs that are not
/// fragment links, in which case the browser's default handling applies.
pub fn target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Window scroll position that leaves `header_offset` pixels above the target.
///
/// `element_top` is the target's top in document coordinates.
pub fn scroll_top_for(element_top: f64, header_offset: f64) -> f64 {
    (element_top - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_left_to_the_browser() {
        assert_eq!(target_id("#"), None);
    }

    #[test]
    fn fragment_links_resolve_to_ids() {
        assert_eq!(target_id("#section1"), Some("section1"));
        assert_eq!(target_id("#1-intro"), Some("1-intro"));
    }

    #[test]
    fn non_fragment_links_are_ignored() {
        assert_eq!(target_id("/about#team"), None);
        assert_eq!(target_id(""), None);
    }

    #[test]
    fn scroll_clears_the_header() {
        assert_eq!(scroll_top_for(1200.0, DEFAULT_HEADER_OFFSET_PX), 1120.0);
        assert_eq!(scroll_top_for(30.0, DEFAULT_HEADER_OFFSET_PX), 0.0);
    }
}
