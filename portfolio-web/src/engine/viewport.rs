use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use super::camera::BackgroundCamera;

/// Size of the output surface in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// `None` while the surface has no height (e.g. a minimised window).
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

/// Seed the viewport from the primary window once it exists.
pub fn init_viewport_from_window(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportState>,
) {
    if let Ok(window) = windows.single() {
        *viewport = ViewportState::new(window.width(), window.height());
        debug!(
            "Background viewport initialised at {}x{}",
            viewport.width, viewport.height
        );
    }
}

/// Keep the surface size and camera aspect in step with the window.
pub fn handle_viewport_resize(
    mut resized: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportState>,
    mut projections: Query<&mut Projection, With<BackgroundCamera>>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };

    *viewport = ViewportState::new(event.width, event.height);

    let Some(aspect_ratio) = viewport.aspect_ratio() else {
        return;
    };
    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect_ratio;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resize_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_event::<WindowResized>()
            .init_resource::<ViewportState>()
            .add_systems(Update, handle_viewport_resize);

        let camera = app
            .world_mut()
            .spawn((
                BackgroundCamera,
                Projection::Perspective(PerspectiveProjection::default()),
            ))
            .id();
        (app, camera)
    }

    fn resize(app: &mut App, width: f32, height: f32) {
        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width,
            height,
        });
        app.update();
    }

    #[test]
    fn resize_matches_new_viewport_exactly() {
        let (mut app, camera) = resize_app();
        resize(&mut app, 1024.0, 512.0);

        assert_eq!(
            *app.world().resource::<ViewportState>(),
            ViewportState::new(1024.0, 512.0)
        );
        let Projection::Perspective(perspective) =
            app.world().get::<Projection>(camera).unwrap()
        else {
            panic!("background camera lost its perspective projection");
        };
        assert_eq!(perspective.aspect_ratio, 2.0);
    }

    #[test]
    fn only_the_latest_resize_counts() {
        let (mut app, _) = resize_app();
        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width: 10.0,
            height: 10.0,
        });
        resize(&mut app, 640.0, 480.0);

        assert_eq!(
            app.world().resource::<ViewportState>().size(),
            Vec2::new(640.0, 480.0)
        );
    }

    #[test]
    fn zero_height_keeps_previous_aspect() {
        let (mut app, camera) = resize_app();
        resize(&mut app, 800.0, 400.0);
        resize(&mut app, 800.0, 0.0);

        assert_eq!(app.world().resource::<ViewportState>().height, 0.0);
        let Projection::Perspective(perspective) =
            app.world().get::<Projection>(camera).unwrap()
        else {
            panic!("background camera lost its perspective projection");
        };
        assert_eq!(perspective.aspect_ratio, 2.0);
    }
}
