use bevy::log::warn;
use constants::page::{SKILL_BAR_FILL, SKILL_BAR_PERCENT_PROPERTY, SKILL_BAR_THRESHOLD, SKILL_BARS};
use constants::timing::SKILL_BAR_FILL_DELAY_MS;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{DomError, IntersectionWatch, Liveness, PageController, collect, sleep};
use crate::ui::skill_bars::{Percent, SkillBarAnimator};

#[derive(Default)]
pub struct SkillBarController {
    watch: Option<IntersectionWatch>,
    liveness: Liveness,
}

impl PageController for SkillBarController {
    fn name(&self) -> &'static str {
        "skill bars"
    }

    fn attach(&mut self, document: &Document) -> Result<(), DomError> {
        let bars: Vec<Element> = collect(document.query_selector_all(SKILL_BARS)?);
        if bars.is_empty() {
            return Err(DomError::Missing(SKILL_BARS));
        }

        let fills: Vec<Option<HtmlElement>> = bars
            .iter()
            .map(|bar| {
                bar.query_selector(SKILL_BAR_FILL)
                    .ok()
                    .flatten()
                    .and_then(|fill| fill.dyn_into::<HtmlElement>().ok())
            })
            .collect();
        let targets = fills.iter().map(|f| f.as_ref().and_then(read_target)).collect();
        let mut animator = SkillBarAnimator::new(targets);

        self.liveness = Liveness::live();
        let liveness = self.liveness.clone();
        self.watch = Some(IntersectionWatch::new(
            bars,
            SKILL_BAR_THRESHOLD,
            None,
            move |index, intersecting, target, observer| {
                let Some(animation) = animator.on_intersection(index, intersecting) else {
                    return;
                };
                observer.unobserve(target);

                let Some(fill) = fills[index].clone() else {
                    return;
                };
                let _ = fill.style().set_property("width", animation.initial_width);

                let liveness = liveness.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    sleep(SKILL_BAR_FILL_DELAY_MS).await;
                    if liveness.is_live() {
                        let _ = fill.style().set_property("width", &animation.final_width);
                    }
                });
            },
        )?);
        Ok(())
    }

    fn detach(&mut self) {
        self.liveness.cancel();
        self.watch = None;
    }
}

/// The fill target, read once from the element's inline `--percent`.
fn read_target(fill: &HtmlElement) -> Option<Percent> {
    let raw = fill
        .style()
        .get_property_value(SKILL_BAR_PERCENT_PROPERTY)
        .ok()?;
    match raw.parse() {
        Ok(percent) => Some(percent),
        Err(e) => {
            warn!("Skill bar left unanimated: {}", e);
            None
        }
    }
}
