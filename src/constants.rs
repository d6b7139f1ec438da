//! Application-wide constants
//!
//! This module contains the magic numbers and string literals of the banner
//! model and its derived display rules, providing a single source of truth.

/// Default banner configuration values
pub mod defaults {
    pub const TITLE: &str = "Exploring the World of Web Development";
    pub const SUBTITLE: &str = "Creating interactive experiences that solve real problems";
    pub const BACKGROUND_COLOR: &str = "#1e40af";
    pub const TEXT_COLOR: &str = "#ffffff";
    pub const OVERLAY_OPACITY: f32 = 0.7;
    pub const FONT_SIZE: f32 = 3.0;
    pub const IMAGE_INDEX: i32 = 0;
    pub const SHOW_MOUNTAINS: bool = true;
    pub const SHOW_SUN: bool = true;
    pub const ANIMATION_SPEED: f32 = 2.0;
}

/// Ranges offered by the range controls (stored values are not clamped)
pub mod ranges {
    pub const FONT_SIZE: (f32, f32) = (1.0, 5.0);
    pub const OVERLAY_OPACITY: (f32, f32) = (0.0, 1.0);
    pub const ANIMATION_SPEED: (f32, f32) = (1.0, 5.0);

    /// Step shared by every range control
    pub const STEP: f32 = 0.1;
}

/// Typography derivation (all sizes in rem)
pub mod typography {
    pub const TITLE_BASE_REM: f32 = 1.5;
    pub const TITLE_REM_PER_STEP: f32 = 0.5;
    pub const SUBTITLE_BASE_REM: f32 = 1.0;
    pub const SUBTITLE_REM_PER_STEP: f32 = 0.25;

    /// Logical pixels per rem when painting
    pub const PIXELS_PER_REM: f32 = 16.0;

    /// Painted font sizes are clipped to this pixel range; stored values are not
    pub const MIN_FONT_PX: f32 = 1.0;
    pub const MAX_FONT_PX: f32 = 192.0;
}

/// Decorative layer geometry and timing
pub mod decor {
    /// Sun pulse period is `SUN_PERIOD_OFFSET - animation_speed` seconds
    pub const SUN_PERIOD_OFFSET: f32 = 6.0;

    /// Shortest allowed sun pulse period in seconds
    pub const SUN_MIN_PERIOD: f32 = 1.0;

    /// Pulse period used when the config carries no animation speed
    pub const SUN_FIXED_PERIOD: f32 = 4.0;

    pub const SUN_DIAMETER: f32 = 80.0;
    pub const SUN_INSET: f32 = 40.0;
    pub const SUN_SCALE_KEYFRAMES: [f32; 3] = [1.0, 1.1, 1.0];
    pub const SUN_OPACITY_KEYFRAMES: [f32; 3] = [0.7, 0.9, 0.7];

    /// Mountains cover the bottom fifth of the banner
    pub const MOUNTAIN_HEIGHT_FRACTION: f32 = 0.2;
    pub const MOUNTAIN_OPACITY: f32 = 0.3;
    pub const MOUNTAIN_ENTRANCE_OFFSET: f32 = 100.0;
    pub const MOUNTAIN_ENTRANCE_SECS: f64 = 1.0;
}

/// Floating particle batch parameters
pub mod particles {
    pub const COUNT: usize = 10;

    /// Base duration used when the config carries no animation speed
    pub const FIXED_BASE_DURATION: f32 = 2.0;

    /// Upper bound (exclusive) of the random duration jitter in seconds
    pub const DURATION_JITTER: f32 = 2.0;

    /// Drift targets are drawn from `-DRIFT_EXTENT..DRIFT_EXTENT` logical pixels
    pub const DRIFT_EXTENT: f32 = 50.0;

    pub const DIAMETER: f32 = 12.0;
    pub const OPACITY_KEYFRAMES: [f32; 3] = [0.3, 0.7, 0.3];
}

/// Title and subtitle entrance animation
pub mod entrance {
    pub const TEXT_OFFSET: f32 = 50.0;
    pub const TEXT_SECS: f64 = 0.8;
    pub const SUBTITLE_DELAY_SECS: f64 = 0.2;
}
