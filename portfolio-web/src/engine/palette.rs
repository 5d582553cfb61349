use bevy::prelude::*;
use constants::render_settings::{FALLBACK_ACCENT, FALLBACK_PRIMARY};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PaletteError {
    #[error("unrecognised colour value: {0:?}")]
    Unrecognised(String),
    #[error("colour channel out of range in {0:?}")]
    ChannelOutOfRange(String),
}

/// The two theme colours the dust gradient runs between.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BackgroundPalette {
    pub primary: Color,
    pub accent: Color,
}

impl Default for BackgroundPalette {
    fn default() -> Self {
        Self {
            primary: FALLBACK_PRIMARY,
            accent: FALLBACK_ACCENT,
        }
    }
}

impl BackgroundPalette {
    /// Build from raw CSS custom property values. A missing or unparsable value
    /// keeps the fallback for that slot.
    pub fn from_css(primary: Option<&str>, accent: Option<&str>) -> Self {
        let fallback = Self::default();
        Self {
            primary: resolve_slot("primary", primary, fallback.primary),
            accent: resolve_slot("accent", accent, fallback.accent),
        }
    }

    /// Linear blend between primary (`t = 0`) and accent (`t = 1`).
    pub fn blend(&self, t: f32) -> LinearRgba {
        self.primary
            .to_linear()
            .mix(&self.accent.to_linear(), t.clamp(0.0, 1.0))
    }
}

fn resolve_slot(name: &str, value: Option<&str>, fallback: Color) -> Color {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        debug!("No --{} colour on the page, using fallback", name);
        return fallback;
    };

    match parse_css_color(raw) {
        Ok(color) => color,
        Err(e) => {
            warn!("Ignoring --{} colour: {}", name, e);
            fallback
        }
    }
}

/// Parse the subset of CSS colour syntax that theme variables use:
/// hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) and `rgb()` / `rgba()`.
pub fn parse_css_color(value: &str) -> Result<Color, PaletteError> {
    let value = value.trim();

    if value.starts_with('#') {
        return Srgba::hex(value)
            .map(Color::Srgba)
            .map_err(|_| PaletteError::Unrecognised(value.to_string()));
    }

    let lower = value.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| PaletteError::Unrecognised(value.to_string()))?;

    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(PaletteError::Unrecognised(value.to_string()));
    }

    let mut channels = [0.0f32; 3];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        *channel = parse_channel(part, 255.0, value)?;
    }
    let alpha = match parts.get(3) {
        Some(part) => parse_channel(part, 1.0, value)?,
        None => 1.0,
    };

    Ok(Color::srgba(channels[0], channels[1], channels[2], alpha))
}

/// Normalise one channel to `[0, 1]`. Percentages are accepted on any channel.
fn parse_channel(part: &str, scale: f32, original: &str) -> Result<f32, PaletteError> {
    let (number, scale) = match part.strip_suffix('%') {
        Some(n) => (n, 100.0),
        None => (part, scale),
    };
    let parsed: f32 = number
        .parse()
        .map_err(|_| PaletteError::Unrecognised(original.to_string()))?;
    let normalised = parsed / scale;
    if !(0.0..=1.0).contains(&normalised) {
        return Err(PaletteError::ChannelOutOfRange(original.to_string()));
    }
    Ok(normalised)
}
