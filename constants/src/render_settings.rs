use bevy::color::Color;

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera rest position on the Z axis, looking back at the origin.
pub const CAMERA_DISTANCE: f32 = 5.0;

pub const DUST_SPRITE_SIZE: f32 = 0.05;
pub const DUST_OPACITY: f32 = 0.8;

pub const STAR_SPRITE_SIZE: f32 = 0.1;
pub const STAR_OPACITY: f32 = 0.9;
pub const STAR_COLOR: Color = Color::WHITE;

/// Used when the page does not expose `--primary` / `--accent`.
pub const FALLBACK_PRIMARY: Color = Color::srgb(0.424, 0.388, 1.0);
pub const FALLBACK_ACCENT: Color = Color::srgb(0.0, 0.831, 1.0);

pub const PARTICLE_SHADER_PATH: &str = "shaders/particle_sprite.wgsl";
