use constants::page::{ACTIVE_CLASS, NAV_LINKS, SECTIONS};
use web_sys::{Document, Element, Event, HtmlElement};

use super::{DomError, Listener, PageController, collect, window};
use crate::ui::nav_highlight::{SectionBounds, active_links, current_section};

#[derive(Default)]
pub struct NavHighlightController {
    listener: Option<Listener>,
}

impl PageController for NavHighlightController {
    fn name(&self) -> &'static str {
        "nav highlight"
    }

    fn attach(&mut self, document: &Document) -> Result<(), DomError> {
        let links: Vec<Element> = collect(document.query_selector_all(NAV_LINKS)?);
        if links.is_empty() {
            return Err(DomError::Missing(NAV_LINKS));
        }
        // Sections without an id cannot be linked to.
        let sections: Vec<HtmlElement> = collect::<HtmlElement>(
            document.query_selector_all(SECTIONS)?,
        )
        .into_iter()
        .filter(|s| !s.id().is_empty())
        .collect();

        let window = window()?;
        highlight(&window, &sections, &links);

        let scroll_window = window.clone();
        self.listener = Some(Listener::new(&window, "scroll", move |_: Event| {
            highlight(&scroll_window, &sections, &links);
        })?);
        Ok(())
    }

    fn detach(&mut self) {
        self.listener = None;
    }
}

fn highlight(window: &web_sys::Window, sections: &[HtmlElement], links: &[Element]) {
    // Layout can shift (images, fonts), so bounds are read on every scroll.
    let bounds: Vec<SectionBounds> = sections
        .iter()
        .map(|s| SectionBounds::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
        .collect();
    let scroll_y = window.scroll_y().unwrap_or_default();
    let current = current_section(&bounds, scroll_y);

    let hrefs: Vec<String> = links
        .iter()
        .map(|link| link.get_attribute("href").unwrap_or_default())
        .collect();
    let states = active_links(hrefs.iter().map(String::as_str), current);

    for (link, active) in links.iter().zip(states) {
        let classes = link.class_list();
        let _ = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
    }
}
