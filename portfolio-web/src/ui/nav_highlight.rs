use constants::page::NAV_SCROLL_OFFSET_PX;

/// Vertical extent of a page section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section under the reading line. When sections overlap the one
/// latest in document order wins.
pub fn current_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let reading_line = scroll_y + NAV_SCROLL_OFFSET_PX;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(reading_line))
        .map(|s| s.id.as_str())
}

/// For each nav link href, whether it should carry the active class.
pub fn active_links<'a>(
    hrefs: impl IntoIterator<Item = &'a str>,
    current: Option<&str>,
) -> Vec<bool> {
    hrefs
        .into_iter()
        .map(|href| match current {
            Some(id) => href.strip_prefix('#') == Some(id),
            None => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("projects", 1400.0, 1000.0),
        ]
    }

    #[test]
    fn reading_line_inside_about_activates_only_about() {
        let sections = page();
        // 700 + 150 = 850, inside [800, 1400)
        let current = current_section(&sections, 700.0);
        assert_eq!(current, Some("about"));

        let hrefs = ["#home", "#about", "#projects", "#contact"];
        assert_eq!(
            active_links(hrefs, current),
            vec![false, true, false, false]
        );
    }

    #[test]
    fn section_bottom_edge_is_exclusive() {
        let sections = page();
        // 1250 + 150 = 1400 is the first pixel of projects.
        assert_eq!(current_section(&sections, 1250.0), Some("projects"));
    }

    #[test]
    fn nothing_active_past_the_last_section() {
        let sections = page();
        let current = current_section(&sections, 5000.0);
        assert_eq!(current, None);
        assert!(active_links(["#home", "#about"], current).iter().all(|a| !a));
    }

    #[test]
    fn external_links_never_activate() {
        assert_eq!(
            active_links(["about", "https://x.dev/#about"], Some("about")),
            vec![false, false]
        );
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let sections = vec![
            SectionBounds::new("outer", 0.0, 2000.0),
            SectionBounds::new("inner", 500.0, 200.0),
        ];
        assert_eq!(current_section(&sections, 450.0), Some("inner"));
    }
}
