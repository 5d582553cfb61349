use bevy::prelude::*;
use std::sync::{Arc, Mutex};

use super::viewport::ViewportState;

/// Latest pointer position, normalised to `[-1, 1]` on both axes with +Y up.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
}

impl PointerState {
    /// Map client pixel coordinates (origin top-left) into the normalised range.
    /// A degenerate viewport leaves the pointer centred.
    pub fn from_client(client: Vec2, viewport: Vec2) -> Self {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Self::default();
        }

        let x = client.x / viewport.x * 2.0 - 1.0;
        let y = -(client.y / viewport.y) * 2.0 + 1.0;
        Self {
            position: Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE),
        }
    }
}

/// Client-space pointer samples pushed by the page's `mousemove` listener.
/// The background canvas ignores pointer events, so on the web the window
/// never reports cursor movement and this queue is the only source.
#[derive(Resource, Clone, Default)]
pub struct PointerQueue(Arc<Mutex<Vec<Vec2>>>);

impl PointerQueue {
    pub fn push(&self, client: Vec2) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(client);
        }
    }

    fn take_latest(&self) -> Option<Vec2> {
        let mut queue = self.0.lock().ok()?;
        let latest = queue.last().copied();
        queue.clear();
        latest
    }
}

/// Drain queued page pointer samples; only the newest one matters.
pub fn apply_queued_pointer(
    queue: Option<Res<PointerQueue>>,
    viewport: Res<ViewportState>,
    mut pointer: ResMut<PointerState>,
) {
    let Some(queue) = queue else {
        return;
    };

    if let Some(client) = queue.take_latest() {
        *pointer = PointerState::from_client(client, viewport.size());
    }
}

/// Native builds see cursor movement through the window itself.
pub fn track_window_cursor(
    mut cursor_moved: EventReader<CursorMoved>,
    viewport: Res<ViewportState>,
    mut pointer: ResMut<PointerState>,
) {
    if let Some(cursor) = cursor_moved.read().last() {
        *pointer = PointerState::from_client(cursor.position, viewport.size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_centre_normalise() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(
            PointerState::from_client(Vec2::ZERO, viewport).position,
            Vec2::new(-1.0, 1.0)
        );
        assert_eq!(
            PointerState::from_client(viewport, viewport).position,
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(
            PointerState::from_client(viewport / 2.0, viewport).position,
            Vec2::ZERO
        );
    }

    #[test]
    fn out_of_window_samples_are_clamped() {
        let pointer = PointerState::from_client(Vec2::new(-50.0, 900.0), Vec2::new(800.0, 600.0));
        assert_eq!(pointer.position, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn zero_sized_viewport_centres_pointer() {
        let pointer = PointerState::from_client(Vec2::new(10.0, 10.0), Vec2::ZERO);
        assert_eq!(pointer, PointerState::default());
    }

    #[test]
    fn queue_applies_latest_sample_only() {
        let mut app = App::new();
        let queue = PointerQueue::default();
        app.insert_resource(queue.clone())
            .insert_resource(ViewportState::new(200.0, 100.0))
            .init_resource::<PointerState>()
            .add_systems(Update, apply_queued_pointer);

        queue.push(Vec2::new(0.0, 0.0));
        queue.push(Vec2::new(150.0, 25.0));
        app.update();

        let pointer = app.world().resource::<PointerState>();
        assert_eq!(pointer.position, Vec2::new(0.5, 0.5));

        // An empty queue leaves the last position in place.
        app.update();
        let pointer = app.world().resource::<PointerState>();
        assert_eq!(pointer.position, Vec2::new(0.5, 0.5));
    }
}
