/// Number of points in the dense background dust cloud.
pub const DUST_COUNT: usize = 1500;

/// Dust coordinates are sampled from `[-DUST_HALF_EXTENT, DUST_HALF_EXTENT]` on every axis.
pub const DUST_HALF_EXTENT: f32 = 5.0;

/// Number of points in the sparse star cloud.
pub const STAR_COUNT: usize = 100;

/// Star coordinates are sampled from `[-STAR_HALF_EXTENT, STAR_HALF_EXTENT]` on every axis.
pub const STAR_HALF_EXTENT: f32 = 7.5;

/// Dust rotation added per frame, radians about X and Y.
pub const DUST_DRIFT_PER_FRAME: (f32, f32) = (0.0005, 0.001);

/// How far the pointer can pull the camera away from the centre line.
pub const POINTER_FOLLOW_SCALE: f32 = 0.5;

/// Fraction of the remaining distance the camera covers each frame.
pub const CAMERA_EASING: f32 = 0.05;
