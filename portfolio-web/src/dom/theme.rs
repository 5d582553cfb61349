use bevy::log::warn;
use constants::page::{DARK_SCHEME_QUERY, LIGHT_THEME_CLASS, THEME_TOGGLE};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, Event, HtmlElement, Storage};

use super::{DomError, Listener, PageController, window};
use crate::ui::theme::{PreferenceStore, Theme, ThemeToggle};

/// `window.localStorage`, or nothing when storage is disabled.
pub struct LocalStorage(Option<Storage>);

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            if let Err(e) = storage.set_item(key, value) {
                warn!("Could not persist {}={}: {:?}", key, value, e);
            }
        }
    }
}

#[derive(Default)]
pub struct ThemeController {
    listener: Option<Listener>,
}

impl PageController for ThemeController {
    fn name(&self) -> &'static str {
        "theme toggle"
    }

    fn attach(&mut self, document: &Document) -> Result<(), DomError> {
        let button = document
            .query_selector(THEME_TOGGLE)?
            .ok_or(DomError::Missing(THEME_TOGGLE))?;
        let body = document.body().ok_or(DomError::Missing("body"))?;
        let window = window()?;

        let storage = window.local_storage().ok().flatten();
        let prefers_dark = window
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());

        let toggle = ThemeToggle::new(LocalStorage(storage), prefers_dark);
        apply_theme(&body, &button, toggle.current())?;
        let toggle = Rc::new(RefCell::new(toggle));

        let target = button.clone();
        self.listener = Some(Listener::new(&button, "click", move |_: Event| {
            let theme = toggle.borrow_mut().toggle();
            if let Err(e) = apply_theme(&body, &target, theme) {
                warn!("Could not apply {} theme: {}", theme.as_str(), e);
            }
        })?);
        Ok(())
    }

    fn detach(&mut self) {
        self.listener = None;
    }
}

fn apply_theme(body: &HtmlElement, button: &Element, theme: Theme) -> Result<(), DomError> {
    let classes = body.class_list();
    if theme.uses_light_class() {
        classes.add_1(LIGHT_THEME_CLASS)?;
    } else {
        classes.remove_1(LIGHT_THEME_CLASS)?;
    }
    button.set_inner_html(theme.toggle_icon_html());
    Ok(())
}
