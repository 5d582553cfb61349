use bevy::log::{error, info, warn};
use portfolio_web::engine::app_setup::{create_app, init_logging};

#[cfg(target_arch = "wasm32")]
fn main() {
    use portfolio_web::dom::{Page, background::mount_background};

    console_error_panic_hook::set_once();
    init_logging();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        error!("No document; page runtime not started");
        return;
    };

    let page = Page::attach(&document);
    info!("Page runtime attached {} behaviours", page.len());
    // Listeners live as long as the page itself.
    std::mem::forget(page);

    // The renderer only starts once the browser has granted a GPU adapter.
    wasm_bindgen_futures::spawn_local(async move {
        match mount_background(&document).await {
            Ok(mount) => {
                let mut app = create_app(mount.config);
                std::mem::forget(mount.pointer_listener);
                app.run();
            }
            Err(e) => warn!("Particle background disabled: {}", e),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use portfolio_web::engine::app_setup::BackgroundConfig;
    use portfolio_web::engine::palette::BackgroundPalette;
    use portfolio_web::engine::settings::ParticleFieldSettings;

    init_logging();

    let settings = match std::env::args().nth(1) {
        Some(path) => load_settings(&path),
        None => ParticleFieldSettings::default(),
    };

    let mut app = create_app(BackgroundConfig {
        settings,
        palette: BackgroundPalette::default(),
        canvas_selector: None,
    });
    info!("Native particle field preview");
    app.run();
}

/// Native preview: an optional JSON file with the same shape as the page's
/// `data-particle-field` attribute.
#[cfg(not(target_arch = "wasm32"))]
fn load_settings(path: &str) -> portfolio_web::engine::settings::ParticleFieldSettings {
    use portfolio_web::engine::settings::ParticleFieldSettings;

    match std::fs::read_to_string(path) {
        Ok(json) => ParticleFieldSettings::from_json(&json).unwrap_or_else(|e| {
            warn!("Ignoring {}: {}", path, e);
            ParticleFieldSettings::default()
        }),
        Err(e) => {
            error!("Could not read {}: {}", path, e);
            ParticleFieldSettings::default()
        }
    }
}
