use bevy::prelude::*;

use super::point_cloud::DustCloud;
use super::settings::ParticleFieldSettings;

/// Run state of the per-frame background update. Rendering itself is driven
/// by bevy; stopping freezes the drift and camera follow.
#[derive(Resource, Debug, Default)]
pub struct BackgroundAnimation {
    running: bool,
    frames: u64,
}

impl BackgroundAnimation {
    pub fn start(&mut self) {
        if !self.running {
            info!("Background animation started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            info!("Background animation stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames advanced while running.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

pub fn animation_running(animation: Res<BackgroundAnimation>) -> bool {
    animation.running
}

/// Accumulated drift angles, radians about X and Y.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Drift {
    pub x: f32,
    pub y: f32,
}

pub fn count_frame(mut animation: ResMut<BackgroundAnimation>) {
    animation.frames += 1;
}

/// Constant per-frame rotation of the dust cloud.
pub fn drift_dust(
    settings: Res<ParticleFieldSettings>,
    mut clouds: Query<(&mut Drift, &mut Transform), With<DustCloud>>,
) {
    let (dx, dy) = settings.drift_per_frame;
    for (mut drift, mut transform) in &mut clouds {
        drift.x += dx;
        drift.y += dy;
        transform.rotation = Quat::from_euler(EulerRot::XYZ, drift.x, drift.y, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drift_app() -> (App, Entity) {
        let mut app = App::new();
        app.init_resource::<ParticleFieldSettings>()
            .init_resource::<BackgroundAnimation>()
            .add_systems(
                Update,
                (count_frame, drift_dust).run_if(animation_running),
            );
        let dust = app
            .world_mut()
            .spawn((DustCloud, Drift::default(), Transform::IDENTITY))
            .id();
        (app, dust)
    }

    #[test]
    fn stopped_animation_does_not_advance() {
        let (mut app, dust) = drift_app();
        for _ in 0..5 {
            app.update();
        }

        assert_eq!(app.world().resource::<BackgroundAnimation>().frames(), 0);
        assert_eq!(
            app.world().get::<Transform>(dust).unwrap().rotation,
            Quat::IDENTITY
        );
    }

    #[test]
    fn bounded_run_accumulates_fixed_drift() {
        let (mut app, dust) = drift_app();
        app.world_mut()
            .resource_mut::<BackgroundAnimation>()
            .start();
        for _ in 0..100 {
            app.update();
        }
        app.world_mut().resource_mut::<BackgroundAnimation>().stop();
        app.update();

        let animation = app.world().resource::<BackgroundAnimation>();
        assert_eq!(animation.frames(), 100);
        assert!(!animation.is_running());

        let drift = app.world().get::<Drift>(dust).unwrap();
        assert!((drift.x - 0.05).abs() < 1e-5);
        assert!((drift.y - 0.1).abs() < 1e-5);

        let expected = Quat::from_euler(EulerRot::XYZ, drift.x, drift.y, 0.0);
        let rotation = app.world().get::<Transform>(dust).unwrap().rotation;
        assert!(rotation.abs_diff_eq(expected, 1e-6));
    }
}
