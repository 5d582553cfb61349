use constants::page::{TYPEWRITER_CURSOR_BORDER, TYPEWRITER_TARGET};
use constants::timing::{
    TYPEWRITER_BLINK_INTERVAL_MS, TYPEWRITER_CHAR_INTERVAL_MS, TYPEWRITER_START_DELAY_MS,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{DomError, Liveness, PageController, sleep};
use crate::ui::typewriter::{TypeStep, Typewriter};

#[derive(Default)]
pub struct TypewriterController {
    liveness: Liveness,
}

impl PageController for TypewriterController {
    fn name(&self) -> &'static str {
        "typewriter"
    }

    fn attach(&mut self, document: &Document) -> Result<(), DomError> {
        let element: HtmlElement = document
            .query_selector(TYPEWRITER_TARGET)?
            .and_then(|e| e.dyn_into().ok())
            .ok_or(DomError::Missing(TYPEWRITER_TARGET))?;

        let text = element.text_content().unwrap_or_default();
        element.set_text_content(Some(""));
        let style = element.style();
        style.set_property("width", "0")?;
        style.set_property("border-right", TYPEWRITER_CURSOR_BORDER)?;

        self.liveness = Liveness::live();
        let liveness = self.liveness.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let mut writer = Typewriter::new(&text);
            sleep(TYPEWRITER_START_DELAY_MS).await;

            loop {
                if !liveness.is_live() {
                    return;
                }
                match writer.tick() {
                    TypeStep::Typed { text, width_ch } => {
                        element.set_text_content(Some(&text));
                        let _ = style.set_property("width", &format!("{}ch", width_ch));
                        sleep(TYPEWRITER_CHAR_INTERVAL_MS).await;
                    }
                    TypeStep::Finished => break,
                }
            }

            loop {
                sleep(TYPEWRITER_BLINK_INTERVAL_MS).await;
                if !liveness.is_live() {
                    return;
                }
                let _ = style.set_property("border-right-color", writer.blink());
            }
        });
        Ok(())
    }

    fn detach(&mut self) {
        self.liveness.cancel();
    }
}
