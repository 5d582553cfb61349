use bevy::asset::AssetMetaCheck;
use bevy::log::{DEFAULT_FILTER, LogPlugin};
use bevy::prelude::*;
use bevy::window::{CompositeAlphaMode, PresentMode};

use super::palette::BackgroundPalette;
use super::particle_field::ParticleFieldPlugin;
#[cfg(target_arch = "wasm32")]
use super::pointer::PointerQueue;
use super::settings::ParticleFieldSettings;

/// Everything the page hands over to the renderer at startup.
pub struct BackgroundConfig {
    pub settings: ParticleFieldSettings,
    pub palette: BackgroundPalette,
    /// Selector of the canvas bevy binds to on the web.
    pub canvas_selector: Option<String>,
    #[cfg(target_arch = "wasm32")]
    pub pointer_queue: PointerQueue,
}

/// Outcome of asking the browser for WebGPU before the renderer starts.
/// Bevy panics when it cannot get an adapter, so anything but `Available`
/// must keep the app from being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsSupport {
    /// `navigator.gpu` is not exposed.
    NoWebGpu,
    /// WebGPU exists but no adapter was granted (blocklisted or disabled GPU).
    NoAdapter,
    Available,
}

impl GraphicsSupport {
    pub fn from_checks(api_exposed: bool, adapter_found: bool) -> Self {
        match (api_exposed, adapter_found) {
            (false, _) => Self::NoWebGpu,
            (true, false) => Self::NoAdapter,
            (true, true) => Self::Available,
        }
    }

    pub fn is_available(self) -> bool {
        self == Self::Available
    }
}

impl std::fmt::Display for GraphicsSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NoWebGpu => "WebGPU is not available in this browser",
            Self::NoAdapter => "no WebGPU adapter was granted",
            Self::Available => "WebGPU adapter available",
        })
    }
}

/// Page logging: bevy's defaults plus debug output from this crate.
pub fn log_plugin() -> LogPlugin {
    LogPlugin {
        filter: format!("{},portfolio_web=debug", DEFAULT_FILTER),
        ..default()
    }
}

/// Install the global log subscriber. Must run before anything logs, and
/// before `create_app`, which leaves `LogPlugin` out of its plugin set.
pub fn init_logging() {
    let mut app = App::new();
    app.add_plugins(log_plugin());
}

/// Create the background app. Expects `init_logging` to have run.
pub fn create_app(config: BackgroundConfig) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(config.canvas_selector))
        .insert_resource(ClearColor(Color::NONE))
        .insert_resource(config.palette)
        .insert_resource(config.settings.clone());

    #[cfg(target_arch = "wasm32")]
    app.insert_resource(config.pointer_queue);

    app.add_plugins(ParticleFieldPlugin);

    match serde_json::to_string(&config.settings) {
        Ok(json) => debug!("Particle field settings: {}", json),
        Err(e) => warn!("Could not serialise particle field settings: {}", e),
    }

    app
}

fn create_default_plugins(canvas_selector: Option<String>) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(canvas_selector)),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .disable::<LogPlugin>()
}

fn create_window_config(canvas_selector: Option<String>) -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        page_canvas_window(canvas_selector)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = canvas_selector;
        Window {
            title: "Particle field".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Window bound to an existing page canvas. The surface must keep its alpha
/// so the page shows through wherever no particle is drawn.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn page_canvas_window(canvas_selector: Option<String>) -> Window {
    Window {
        canvas: canvas_selector,
        fit_canvas_to_parent: true,
        transparent: true,
        composite_alpha_mode: CompositeAlphaMode::PreMultiplied,
        prevent_default_event_handling: false,
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
