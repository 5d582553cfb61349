use bevy::log::warn;
use constants::page::SMOOTH_SCROLL_LINKS;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions};

use super::{DomError, Listener, PageController, collect, window};
use crate::ui::smooth_scroll::{in_page_target, scroll_destination};

#[derive(Default)]
pub struct SmoothScrollController {
    listeners: Vec<Listener>,
}

impl PageController for SmoothScrollController {
    fn name(&self) -> &'static str {
        "smooth scroll"
    }

    fn attach(&mut self, document: &Document) -> Result<(), DomError> {
        let links: Vec<Element> = collect(document.query_selector_all(SMOOTH_SCROLL_LINKS)?);
        if links.is_empty() {
            return Err(DomError::Missing(SMOOTH_SCROLL_LINKS));
        }

        for link in links {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = in_page_target(&href).map(str::to_string) else {
                continue;
            };

            let document = document.clone();
            let listener = Listener::new(&link, "click", move |event: Event| {
                // Invalid selectors (e.g. ids starting with a digit) behave like a missing target.
                let Some(section) = document.query_selector(&target).ok().flatten() else {
                    return;
                };
                event.prevent_default();
                if let Err(e) = scroll_to(&section, &target) {
                    warn!("Smooth scroll to {} failed: {}", target, e);
                }
            })?;
            self.listeners.push(listener);
        }
        Ok(())
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}

fn scroll_to(section: &Element, fragment: &str) -> Result<(), DomError> {
    let window = window()?;
    let top = scroll_destination(
        section.get_bounding_client_rect().top(),
        window.page_y_offset()?,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(fragment))?;
    Ok(())
}
