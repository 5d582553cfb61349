use constants::page::{REVEAL_ROOT_MARGIN, REVEAL_TARGETS, REVEAL_THRESHOLD, REVEALED_CLASS};
use web_sys::{Document, Element};

use super::{DomError, IntersectionWatch, PageController, collect};
use crate::ui::reveal::RevealTracker;

#[derive(Default)]
pub struct RevealController {
    watch: Option<IntersectionWatch>,
}

impl PageController for RevealController {
    fn name(&self) -> &'static str {
        "scroll reveal"
    }

    fn attach(&mut self, document: &Document) -> Result<(), DomError> {
        let elements: Vec<Element> = collect(document.query_selector_all(REVEAL_TARGETS)?);
        if elements.is_empty() {
            return Err(DomError::Missing(REVEAL_TARGETS));
        }

        let mut tracker = RevealTracker::default();
        self.watch = Some(IntersectionWatch::new(
            elements,
            REVEAL_THRESHOLD,
            Some(REVEAL_ROOT_MARGIN),
            move |index, intersecting, target, observer| {
                if tracker.on_intersection(index, intersecting) {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    // Revealed for good; no need to keep watching it.
                    observer.unobserve(target);
                }
            },
        )?);
        Ok(())
    }

    fn detach(&mut self) {
        self.watch = None;
    }
}
