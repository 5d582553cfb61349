use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;

use super::pointer::PointerState;
use super::settings::ParticleFieldSettings;
use super::viewport::ViewportState;

#[derive(Component)]
pub struct BackgroundCamera;

/// Move `current` a fixed fraction of the way toward `target`.
pub fn ease_toward(current: f32, target: f32, easing: f32) -> f32 {
    current + (target - current) * easing
}

/// Where the pointer wants the camera to be on the XY plane.
pub fn pointer_target(pointer: &PointerState, follow_scale: f32) -> Vec2 {
    pointer.position * follow_scale
}

pub fn spawn_background_camera(
    mut commands: Commands,
    settings: Res<ParticleFieldSettings>,
    viewport: Res<ViewportState>,
) {
    let projection = PerspectiveProjection {
        fov: settings.fov_degrees.to_radians(),
        aspect_ratio: viewport.aspect_ratio().unwrap_or(1.0),
        near: constants::render_settings::CAMERA_NEAR,
        far: constants::render_settings::CAMERA_FAR,
    };

    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        // Keep palette colours as the page defines them.
        Tonemapping::None,
        Projection::Perspective(projection),
        Transform::from_xyz(0.0, 0.0, settings.camera_distance).looking_at(Vec3::ZERO, Vec3::Y),
        Msaa::Sample4,
        BackgroundCamera,
    ));
}

/// Ease the camera toward the pointer target and keep it aimed at the origin.
pub fn follow_pointer(
    pointer: Res<PointerState>,
    settings: Res<ParticleFieldSettings>,
    mut cameras: Query<&mut Transform, With<BackgroundCamera>>,
) {
    let target = pointer_target(&pointer, settings.pointer_follow_scale);

    for mut transform in &mut cameras {
        transform.translation.x =
            ease_toward(transform.translation.x, target.x, settings.camera_easing);
        transform.translation.y =
            ease_toward(transform.translation.y, target.y, settings.camera_easing);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_converges_without_overshoot() {
        let target = 0.8 * 0.5;
        let mut position = 0.0f32;
        let mut last_gap = (target - position).abs();

        for _ in 0..200 {
            position = ease_toward(position, target, 0.05);
            let gap = target - position;
            assert!(gap > 0.0, "camera reached or passed the target");
            assert!(gap.abs() < last_gap);
            last_gap = gap.abs();
        }
        assert!(last_gap < 1e-4);
    }

    #[test]
    fn easing_from_above_approaches_from_above() {
        let mut position = 2.0f32;
        for _ in 0..50 {
            let next = ease_toward(position, -0.5, 0.05);
            assert!(next < position && next > -0.5);
            position = next;
        }
    }

    #[test]
    fn follow_pointer_moves_camera_and_keeps_it_aimed() {
        let mut app = App::new();
        app.insert_resource(PointerState {
            position: Vec2::new(1.0, -1.0),
        })
        .init_resource::<ParticleFieldSettings>()
        .add_systems(Update, follow_pointer);

        let camera = app
            .world_mut()
            .spawn((
                BackgroundCamera,
                Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
            ))
            .id();

        let mut previous = Vec2::ZERO;
        for _ in 0..30 {
            app.update();
            let transform = app.world().get::<Transform>(camera).unwrap();
            let xy = transform.translation.truncate();

            assert!(xy.x > previous.x && xy.x < 0.5);
            assert!(xy.y < previous.y && xy.y > -0.5);
            assert_eq!(transform.translation.z, 5.0);

            let forward = transform.forward();
            let to_origin = (-transform.translation).normalize();
            assert!(forward.dot(to_origin) > 0.9999);
            previous = xy;
        }
    }

    #[test]
    fn first_frame_covers_five_percent() {
        let mut app = App::new();
        app.insert_resource(PointerState {
            position: Vec2::new(1.0, 0.0),
        })
        .init_resource::<ParticleFieldSettings>()
        .add_systems(Update, follow_pointer);

        let camera = app
            .world_mut()
            .spawn((BackgroundCamera, Transform::from_xyz(0.0, 0.0, 5.0)))
            .id();
        app.update();

        let x = app.world().get::<Transform>(camera).unwrap().translation.x;
        assert!((x - 0.025).abs() < 1e-6);
    }
}
