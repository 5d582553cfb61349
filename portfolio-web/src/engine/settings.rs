use bevy::prelude::*;
use constants::particle_field::*;
use constants::render_settings::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse particle field settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid particle field settings: {0}")]
    Invalid(&'static str),
}

/// Tunables for one point cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CloudSettings {
    pub count: usize,
    /// Points are sampled inside a cube of this half-width centred on the origin.
    pub half_extent: f32,
    pub sprite_size: f32,
    pub opacity: f32,
}

/// Runtime configuration of the background. Defaults come from the
/// `constants` crate; a JSON document may override any subset of fields.
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct ParticleFieldSettings {
    pub dust: CloudSettings,
    pub stars: CloudSettings,
    /// Radians per frame about (X, Y).
    pub drift_per_frame: (f32, f32),
    pub pointer_follow_scale: f32,
    pub camera_easing: f32,
    pub camera_distance: f32,
    pub fov_degrees: f32,
    /// Fixed RNG seed, mostly useful for reproducible screenshots.
    pub seed: Option<u64>,
}

/// Shape of the JSON override document. Absent fields keep their default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsOverrides {
    dust: CloudOverrides,
    stars: CloudOverrides,
    drift_per_frame: Option<(f32, f32)>,
    pointer_follow_scale: Option<f32>,
    camera_easing: Option<f32>,
    camera_distance: Option<f32>,
    fov_degrees: Option<f32>,
    seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CloudOverrides {
    count: Option<usize>,
    half_extent: Option<f32>,
    sprite_size: Option<f32>,
    opacity: Option<f32>,
}

impl CloudOverrides {
    fn apply(self, cloud: &mut CloudSettings) {
        if let Some(count) = self.count {
            cloud.count = count;
        }
        if let Some(half_extent) = self.half_extent {
            cloud.half_extent = half_extent;
        }
        if let Some(sprite_size) = self.sprite_size {
            cloud.sprite_size = sprite_size;
        }
        if let Some(opacity) = self.opacity {
            cloud.opacity = opacity;
        }
    }
}

impl Default for ParticleFieldSettings {
    fn default() -> Self {
        Self {
            dust: CloudSettings {
                count: DUST_COUNT,
                half_extent: DUST_HALF_EXTENT,
                sprite_size: DUST_SPRITE_SIZE,
                opacity: DUST_OPACITY,
            },
            stars: CloudSettings {
                count: STAR_COUNT,
                half_extent: STAR_HALF_EXTENT,
                sprite_size: STAR_SPRITE_SIZE,
                opacity: STAR_OPACITY,
            },
            drift_per_frame: DUST_DRIFT_PER_FRAME,
            pointer_follow_scale: POINTER_FOLLOW_SCALE,
            camera_easing: CAMERA_EASING,
            camera_distance: CAMERA_DISTANCE,
            fov_degrees: CAMERA_FOV_DEGREES,
            seed: None,
        }
    }
}

impl ParticleFieldSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let overrides: SettingsOverrides = serde_json::from_str(json)?;
        let mut settings = Self::default();

        overrides.dust.apply(&mut settings.dust);
        overrides.stars.apply(&mut settings.stars);
        if let Some(drift) = overrides.drift_per_frame {
            settings.drift_per_frame = drift;
        }
        if let Some(scale) = overrides.pointer_follow_scale {
            settings.pointer_follow_scale = scale;
        }
        if let Some(easing) = overrides.camera_easing {
            settings.camera_easing = easing;
        }
        if let Some(distance) = overrides.camera_distance {
            settings.camera_distance = distance;
        }
        if let Some(fov) = overrides.fov_degrees {
            settings.fov_degrees = fov;
        }
        settings.seed = overrides.seed;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.camera_easing > 0.0 && self.camera_easing < 1.0) {
            return Err(SettingsError::Invalid("camera_easing must be in (0, 1)"));
        }
        for cloud in [&self.dust, &self.stars] {
            if !(cloud.half_extent > 0.0) {
                return Err(SettingsError::Invalid("half_extent must be positive"));
            }
            if !(0.0..=1.0).contains(&cloud.opacity) {
                return Err(SettingsError::Invalid("opacity must be in [0, 1]"));
            }
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(SettingsError::Invalid("fov_degrees must be in (0, 180)"));
        }
        Ok(())
    }
}
