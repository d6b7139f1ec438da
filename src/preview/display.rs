//! Display parameters derived from a banner config snapshot
//!
//! Pure derivation: no painting, no clock. `Banner` feeds the result to egui.

use egui::Color32;

use crate::color;
use crate::config::BannerConfig;
use crate::constants::{decor, defaults, particles, typography};

use super::catalog::ImageCatalog;

/// Everything the painter needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayParams {
    pub title: String,
    pub subtitle: String,
    /// Title size in rem
    pub title_font_size: f32,
    /// Subtitle size in rem
    pub subtitle_font_size: f32,
    pub text_color: Color32,
    /// Catalog slot after wrap-around
    pub image_slot: usize,
    /// Overlay color with the configured opacity already applied
    pub overlay: Color32,
    pub mountains: bool,
    /// Sun pulse period in seconds, `None` when the sun is hidden
    pub sun_period: Option<f32>,
    /// Base duration for particle drift loops
    pub particle_base_duration: f32,
}

pub fn title_font_size(font_size: f32) -> f32 {
    typography::TITLE_BASE_REM + font_size * typography::TITLE_REM_PER_STEP
}

pub fn subtitle_font_size(font_size: f32) -> f32 {
    typography::SUBTITLE_BASE_REM + font_size * typography::SUBTITLE_REM_PER_STEP
}

/// Pixel size to paint a rem size at, clipped to what the font atlas can hold
pub fn font_pixels(size_rem: f32) -> f32 {
    let px = size_rem * typography::PIXELS_PER_REM;
    if px.is_nan() {
        return typography::MIN_FONT_PX;
    }
    px.clamp(typography::MIN_FONT_PX, typography::MAX_FONT_PX)
}

/// Sun pulse period: `max(1, 6 - speed)`, or a fixed period without a speed
pub fn sun_pulse_period(animation_speed: Option<f32>) -> f32 {
    match animation_speed {
        Some(speed) => (decor::SUN_PERIOD_OFFSET - speed).max(decor::SUN_MIN_PERIOD),
        None => decor::SUN_FIXED_PERIOD,
    }
}

/// Base duration of particle drift before the random jitter is added
pub fn particle_base_duration(animation_speed: Option<f32>) -> f32 {
    animation_speed.unwrap_or(particles::FIXED_BASE_DURATION)
}

impl DisplayParams {
    pub fn derive(config: &BannerConfig, catalog: &ImageCatalog) -> Self {
        let overlay_base = color::parse_or(&config.background_color, defaults::BACKGROUND_COLOR);

        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            title_font_size: title_font_size(config.font_size),
            subtitle_font_size: subtitle_font_size(config.font_size),
            text_color: color::parse_or(&config.text_color, defaults::TEXT_COLOR),
            image_slot: catalog.wrap_index(config.image_index),
            overlay: color::with_opacity(overlay_base, config.overlay_opacity),
            mountains: config.show_mountains,
            sun_period: config
                .show_sun
                .then(|| sun_pulse_period(config.animation_speed)),
            particle_base_duration: particle_base_duration(config.animation_speed),
        }
    }
}
