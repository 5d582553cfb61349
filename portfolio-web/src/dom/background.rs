use bevy::log::{debug, warn};
use bevy::math::Vec2;
use constants::page::{
    ACCENT_COLOR_PROPERTY, BACKGROUND_CANVAS_ID, BACKGROUND_CONTAINER_ID,
    BACKGROUND_SETTINGS_ATTRIBUTE, PRIMARY_COLOR_PROPERTY,
};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlCanvasElement, MouseEvent, Window};

use super::{DomError, Listener, window};
use crate::engine::app_setup::{BackgroundConfig, GraphicsSupport};
use crate::engine::palette::BackgroundPalette;
use crate::engine::pointer::PointerQueue;
use crate::engine::settings::ParticleFieldSettings;

#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("{0}")]
    GraphicsUnavailable(GraphicsSupport),
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl From<JsValue> for BackgroundError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.into())
    }
}

/// The mounted canvas plus the page-level pointer listener feeding it.
pub struct BackgroundMount {
    pub config: BackgroundConfig,
    pub pointer_listener: Listener,
}

/// Insert the background canvas and gather everything the renderer needs.
/// Fails without touching the page when no WebGPU adapter can be had.
pub async fn mount_background(document: &Document) -> Result<BackgroundMount, BackgroundError> {
    let window = window()?;
    let support = graphics_support(&window).await;
    if !support.is_available() {
        return Err(BackgroundError::GraphicsUnavailable(support));
    }

    let container = document
        .get_element_by_id(BACKGROUND_CONTAINER_ID)
        .ok_or(DomError::Missing("#threejs-background"))?;

    let canvas = create_canvas(document, &window)?;
    container.insert_before(&canvas, container.first_child().as_ref())?;

    let pointer_queue = PointerQueue::default();
    let queue = pointer_queue.clone();
    let pointer_listener = Listener::new(document, "mousemove", move |event: Event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            queue.push(Vec2::new(mouse.client_x() as f32, mouse.client_y() as f32));
        }
    })?;

    Ok(BackgroundMount {
        config: BackgroundConfig {
            settings: read_settings(&container),
            palette: read_palette(&window, document),
            canvas_selector: Some(format!("#{}", BACKGROUND_CANVAS_ID)),
            pointer_queue,
        },
        pointer_listener,
    })
}

async fn graphics_support(window: &Window) -> GraphicsSupport {
    let gpu = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("gpu"))
        .ok()
        .filter(is_present);
    let Some(gpu) = gpu else {
        return GraphicsSupport::from_checks(false, false);
    };

    let adapter_found = match request_adapter(&gpu).await {
        Ok(adapter) => is_present(&adapter),
        Err(e) => {
            debug!("requestAdapter rejected: {:?}", e);
            false
        }
    };
    GraphicsSupport::from_checks(true, adapter_found)
}

/// `navigator.gpu.requestAdapter()`; resolves to null when no adapter is granted.
async fn request_adapter(gpu: &JsValue) -> Result<JsValue, JsValue> {
    let request: js_sys::Function =
        js_sys::Reflect::get(gpu, &JsValue::from_str("requestAdapter"))?.dyn_into()?;
    let promise: js_sys::Promise = request.call0(gpu)?.dyn_into()?;
    wasm_bindgen_futures::JsFuture::from(promise).await
}

fn is_present(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_null()
}

/// Viewport-sized, behind the content and transparent to pointer events.
fn create_canvas(document: &Document, window: &Window) -> Result<HtmlCanvasElement, BackgroundError> {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| DomError::Js("created element is not a canvas".to_string()))?;
    canvas.set_id(BACKGROUND_CANVAS_ID);

    let width = window.inner_width()?.as_f64().unwrap_or_default();
    let height = window.inner_height()?.as_f64().unwrap_or_default();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let style = canvas.style();
    for (property, value) in [
        ("position", "absolute"),
        ("top", "0"),
        ("left", "0"),
        ("z-index", "0"),
        ("pointer-events", "none"),
    ] {
        style.set_property(property, value)?;
    }
    Ok(canvas)
}

fn read_palette(window: &Window, document: &Document) -> BackgroundPalette {
    let computed = document
        .document_element()
        .and_then(|root| window.get_computed_style(&root).ok().flatten());
    let Some(computed) = computed else {
        debug!("No computed style on the document root, using fallback palette");
        return BackgroundPalette::default();
    };

    let primary = computed.get_property_value(PRIMARY_COLOR_PROPERTY).ok();
    let accent = computed.get_property_value(ACCENT_COLOR_PROPERTY).ok();
    BackgroundPalette::from_css(primary.as_deref(), accent.as_deref())
}

fn read_settings(container: &Element) -> ParticleFieldSettings {
    let Some(json) = container.get_attribute(BACKGROUND_SETTINGS_ATTRIBUTE) else {
        return ParticleFieldSettings::default();
    };
    ParticleFieldSettings::from_json(&json).unwrap_or_else(|e| {
        warn!("Ignoring {}: {}", BACKGROUND_SETTINGS_ATTRIBUTE, e);
        ParticleFieldSettings::default()
    })
}
