use bevy::log::{debug, warn};
use constants::page::{
    CONTACT_FIELDS, CONTACT_FORM, CONTACT_SUBMIT, INVALID_BORDER_COLOR, SENDING_LABEL,
    SENT_MESSAGE,
};
use constants::timing::CONTACT_SEND_DELAY_MS;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use super::{DomError, Listener, Liveness, PageController, collect, sleep, window};
use crate::ui::contact_form::{FieldKind, FormField, Submission, validate};

#[derive(Default)]
pub struct ContactFormController {
    listener: Option<Listener>,
    liveness: Liveness,
}

impl PageController for ContactFormController {
    fn name(&self) -> &'static str {
        "contact form"
    }

    fn attach(&mut self, document: &Document) -> Result<(), DomError> {
        let form: HtmlFormElement = document
            .query_selector(CONTACT_FORM)?
            .and_then(|e| e.dyn_into().ok())
            .ok_or(DomError::Missing(CONTACT_FORM))?;

        self.liveness = Liveness::live();
        let liveness = self.liveness.clone();
        let submission = Rc::new(RefCell::new(Submission::Idle));
        let target = form.clone();

        self.listener = Some(Listener::new(&form, "submit", move |event: Event| {
            event.prevent_default();
            if let Err(e) = on_submit(&target, &submission, &liveness) {
                warn!("Contact form submit failed: {}", e);
            }
        })?);
        Ok(())
    }

    fn detach(&mut self) {
        self.liveness.cancel();
        self.listener = None;
    }
}

enum FieldControl {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldControl {
    fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(element) => element.dyn_into().ok().map(Self::TextArea),
        }
    }

    fn to_field(&self) -> FormField {
        match self {
            Self::Input(input) => FormField::new(
                FieldKind::from_input_type(&input.type_()),
                input.required(),
                input.value(),
            ),
            Self::TextArea(area) => FormField::new(FieldKind::TextArea, area.required(), area.value()),
        }
    }

    fn set_border_color(&self, color: &str) -> Result<(), DomError> {
        let style = match self {
            Self::Input(input) => input.style(),
            Self::TextArea(area) => area.style(),
        };
        style.set_property("border-color", color)?;
        Ok(())
    }
}

fn on_submit(
    form: &HtmlFormElement,
    submission: &Rc<RefCell<Submission>>,
    liveness: &Liveness,
) -> Result<(), DomError> {
    let controls: Vec<FieldControl> = collect::<Element>(form.query_selector_all(CONTACT_FIELDS)?)
        .into_iter()
        .filter_map(FieldControl::from_element)
        .collect();
    let fields: Vec<FormField> = controls.iter().map(FieldControl::to_field).collect();
    let verdict = validate(&fields);

    for (control, valid) in controls.iter().zip(&verdict.field_valid) {
        control.set_border_color(if *valid { "" } else { INVALID_BORDER_COLOR })?;
    }
    if !verdict.is_valid() {
        debug!(
            "Contact form blocked: {} invalid field(s)",
            verdict.invalid_fields().count()
        );
        return Ok(());
    }

    let button: HtmlButtonElement = form
        .query_selector(CONTACT_SUBMIT)?
        .and_then(|e| e.dyn_into().ok())
        .ok_or(DomError::Missing(CONTACT_SUBMIT))?;
    let label = button.text_content().unwrap_or_default();
    if !submission.borrow_mut().begin(&label) {
        return Ok(());
    }
    button.set_text_content(Some(SENDING_LABEL));
    button.set_disabled(true);

    let form = form.clone();
    let submission = Rc::clone(submission);
    let liveness = liveness.clone();
    wasm_bindgen_futures::spawn_local(async move {
        sleep(CONTACT_SEND_DELAY_MS).await;
        if !liveness.is_live() {
            return;
        }
        if let Ok(window) = window() {
            let _ = window.alert_with_message(SENT_MESSAGE);
        }
        form.reset();
        if let Some(label) = submission.borrow_mut().complete() {
            button.set_text_content(Some(&label));
        }
        button.set_disabled(false);
    });
    Ok(())
}
