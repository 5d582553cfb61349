use bevy::prelude::*;
use bevy::pbr::NotShadowCaster;
use bevy::render::view::NoFrustumCulling;
use constants::render_settings::STAR_COLOR;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::animation::{BackgroundAnimation, Drift, animation_running, count_frame, drift_dust};
use super::camera::{follow_pointer, spawn_background_camera};
use super::palette::BackgroundPalette;
use super::point_cloud::{DustCloud, PointCloudData, StarCloud};
use super::pointer::{PointerState, apply_queued_pointer, track_window_cursor};
use super::settings::ParticleFieldSettings;
use super::shaders::ParticleSpriteMaterial;
use super::viewport::{ViewportState, handle_viewport_resize, init_viewport_from_window};

/// Decorative background: a drifting dust cloud, a static star cloud and a
/// camera that leans toward the pointer.
///
/// Expects `ParticleFieldSettings` and `BackgroundPalette` to be inserted
/// beforehand; defaults are used otherwise.
pub struct ParticleFieldPlugin;

impl Plugin for ParticleFieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<ParticleSpriteMaterial>::default())
            .init_resource::<ParticleFieldSettings>()
            .init_resource::<BackgroundPalette>()
            .init_resource::<PointerState>()
            .init_resource::<ViewportState>()
            .init_resource::<BackgroundAnimation>()
            .add_systems(
                Startup,
                (
                    init_viewport_from_window,
                    spawn_background_camera,
                    spawn_particle_clouds,
                    start_animation,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    handle_viewport_resize,
                    (apply_queued_pointer, track_window_cursor),
                    (count_frame, drift_dust, follow_pointer).run_if(animation_running),
                )
                    .chain(),
            );
    }
}

fn start_animation(mut animation: ResMut<BackgroundAnimation>) {
    animation.start();
}

pub fn spawn_particle_clouds(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ParticleSpriteMaterial>>,
    settings: Res<ParticleFieldSettings>,
    palette: Res<BackgroundPalette>,
) {
    let mut rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    let dust = PointCloudData::dust(&mut rng, &settings.dust, &palette);
    commands.spawn((
        Mesh3d(meshes.add(dust.to_sprite_mesh())),
        MeshMaterial3d(materials.add(ParticleSpriteMaterial::new(
            Color::WHITE,
            settings.dust.sprite_size,
            settings.dust.opacity,
            settings.fov_degrees,
        ))),
        Transform::IDENTITY,
        Drift::default(),
        NoFrustumCulling,
        NotShadowCaster,
        DustCloud,
    ));

    let stars = PointCloudData::stars(&mut rng, &settings.stars);
    commands.spawn((
        Mesh3d(meshes.add(stars.to_sprite_mesh())),
        MeshMaterial3d(materials.add(ParticleSpriteMaterial::new(
            STAR_COLOR,
            settings.stars.sprite_size,
            settings.stars.opacity,
            settings.fov_degrees,
        ))),
        Transform::IDENTITY,
        NoFrustumCulling,
        NotShadowCaster,
        StarCloud,
    ));

    info!(
        "Particle field spawned: {} dust points, {} stars",
        dust.len(),
        stars.len()
    );
}
