//! GUI-specific constants for window layout and spacing

/// Studio window dimensions
pub const WINDOW_WIDTH: f32 = 1100.0;
pub const WINDOW_HEIGHT: f32 = 900.0;
pub const WINDOW_MIN_WIDTH: f32 = 640.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Share of the window height given to the banner preview
pub const BANNER_HEIGHT_FRACTION: f32 = 0.55;
pub const BANNER_MIN_HEIGHT: f32 = 240.0;

/// Layout spacing
pub const PADDING: f32 = 16.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Width of the text box paired with a color swatch
pub const COLOR_TEXT_WIDTH: f32 = 120.0;
