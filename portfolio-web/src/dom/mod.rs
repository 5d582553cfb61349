//! Browser bindings for the page behaviours in `ui` and for mounting the
//! particle field canvas. Only built for `wasm32`.

pub mod background;
pub mod contact_form;
pub mod footer_year;
pub mod nav_highlight;
pub mod reveal;
pub mod skill_bars;
pub mod smooth_scroll;
pub mod theme;
pub mod typewriter;

use bevy::log::{debug, warn};
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no element matches {0:?}")]
    Missing(&'static str),
    #[error("window is not available")]
    NoWindow,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{:?}", value))
    }
}

/// A page behaviour bound to live elements.
pub trait PageController {
    fn name(&self) -> &'static str;

    /// Find the elements this behaviour needs and register its listeners.
    /// `DomError::Missing` means the page simply does not use it.
    fn attach(&mut self, document: &Document) -> Result<(), DomError>;

    /// Remove listeners and cancel pending timers. Idempotent.
    fn detach(&mut self);
}

/// Every controller that attached successfully.
pub struct Page {
    controllers: Vec<Box<dyn PageController>>,
}

impl Page {
    pub fn attach(document: &Document) -> Self {
        let mut controllers: Vec<Box<dyn PageController>> = vec![
            Box::new(smooth_scroll::SmoothScrollController::default()),
            Box::new(theme::ThemeController::default()),
            Box::new(reveal::RevealController::default()),
            Box::new(nav_highlight::NavHighlightController::default()),
            Box::new(skill_bars::SkillBarController::default()),
            Box::new(typewriter::TypewriterController::default()),
            Box::new(contact_form::ContactFormController::default()),
            Box::new(footer_year::FooterYearController),
        ];

        controllers.retain_mut(|controller| match controller.attach(document) {
            Ok(()) => {
                debug!("Attached {}", controller.name());
                true
            }
            Err(DomError::Missing(selector)) => {
                debug!("Skipping {}: nothing matches {}", controller.name(), selector);
                controller.detach();
                false
            }
            Err(e) => {
                warn!("Failed to attach {}: {}", controller.name(), e);
                controller.detach();
                false
            }
        });

        Self { controllers }
    }

    pub fn detach(&mut self) {
        for controller in &mut self.controllers {
            controller.detach();
        }
        self.controllers.clear();
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Elements of a node list that are of type `T`; other nodes are skipped.
pub fn collect<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Intersection observer over a fixed element list. The handler receives the
/// element's index in that list. Disconnects when dropped.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionWatch {
    pub fn new(
        elements: Vec<Element>,
        threshold: f64,
        root_margin: Option<&str>,
        mut handler: impl FnMut(usize, bool, &Element, &IntersectionObserver) + 'static,
    ) -> Result<Self, DomError> {
        let observed = elements.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if let Some(index) = observed.iter().position(|e| *e == target) {
                        handler(index, entry.is_intersecting(), &target, &observer);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for element in &elements {
            observer.observe(element);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Shared "still attached" flag for async work spawned by a controller.
#[derive(Clone, Default)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn live() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn cancel(&self) {
        self.0.set(false);
    }
}

/// Resolve after `ms` milliseconds on the browser's timer queue.
pub async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
