use constants::page::HEADER_OFFSET_PX;

/// Fragment selector (`#about`) for links that point inside the page.
/// Bare `#` and anything that is not a fragment are left to the browser.
pub fn in_page_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document-space scroll position that puts the target just below the
/// fixed header.
pub fn scroll_destination(target_viewport_top: f64, page_y_offset: f64) -> f64 {
    target_viewport_top + page_y_offset - HEADER_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_real_fragments_are_intercepted() {
        assert_eq!(in_page_target("#projects"), Some("#projects"));
        assert_eq!(in_page_target("#"), None);
        assert_eq!(in_page_target("https://example.com/#top"), None);
        assert_eq!(in_page_target("/cv.pdf"), None);
        assert_eq!(in_page_target(""), None);
    }

    #[test]
    fn destination_accounts_for_header() {
        assert_eq!(scroll_destination(420.0, 1000.0), 1320.0);
        // Targets above the current viewport have a negative top.
        assert_eq!(scroll_destination(-300.0, 1000.0), 600.0);
    }
}
