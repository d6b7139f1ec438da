//! Banner configuration model
//!
//! `BannerConfig` is the single value the whole UI revolves around. It is only
//! ever changed through [`BannerUpdate`], one variant per field, which keeps the
//! shallow-merge semantics while making unknown keys unrepresentable.

use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Complete banner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_overlay_opacity")]
    pub overlay_opacity: f32,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_image_index")]
    pub image_index: i32,
    #[serde(default = "default_show_mountains")]
    pub show_mountains: bool,
    #[serde(default = "default_show_sun")]
    pub show_sun: bool,
    /// Absent in the variant without animation speed control
    #[serde(default = "default_animation_speed")]
    pub animation_speed: Option<f32>,
}

// Default value functions
fn default_title() -> String {
    defaults::TITLE.to_string()
}

fn default_subtitle() -> String {
    defaults::SUBTITLE.to_string()
}

fn default_background_color() -> String {
    defaults::BACKGROUND_COLOR.to_string()
}

fn default_text_color() -> String {
    defaults::TEXT_COLOR.to_string()
}

fn default_overlay_opacity() -> f32 {
    defaults::OVERLAY_OPACITY
}

fn default_font_size() -> f32 {
    defaults::FONT_SIZE
}

fn default_image_index() -> i32 {
    defaults::IMAGE_INDEX
}

fn default_show_mountains() -> bool {
    defaults::SHOW_MOUNTAINS
}

fn default_show_sun() -> bool {
    defaults::SHOW_SUN
}

fn default_animation_speed() -> Option<f32> {
    Some(defaults::ANIMATION_SPEED)
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            background_color: default_background_color(),
            text_color: default_text_color(),
            overlay_opacity: default_overlay_opacity(),
            font_size: default_font_size(),
            image_index: default_image_index(),
            show_mountains: default_show_mountains(),
            show_sun: default_show_sun(),
            animation_speed: default_animation_speed(),
        }
    }
}

/// A single-field change to a [`BannerConfig`]
#[derive(Debug, Clone, PartialEq)]
pub enum BannerUpdate {
    Title(String),
    Subtitle(String),
    BackgroundColor(String),
    TextColor(String),
    OverlayOpacity(f32),
    FontSize(f32),
    ImageIndex(i32),
    ShowMountains(bool),
    ShowSun(bool),
    AnimationSpeed(f32),
}

impl BannerUpdate {
    /// Serialized name of the field this update replaces
    pub fn field(&self) -> &'static str {
        match self {
            BannerUpdate::Title(_) => "title",
            BannerUpdate::Subtitle(_) => "subtitle",
            BannerUpdate::BackgroundColor(_) => "backgroundColor",
            BannerUpdate::TextColor(_) => "textColor",
            BannerUpdate::OverlayOpacity(_) => "overlayOpacity",
            BannerUpdate::FontSize(_) => "fontSize",
            BannerUpdate::ImageIndex(_) => "imageIndex",
            BannerUpdate::ShowMountains(_) => "showMountains",
            BannerUpdate::ShowSun(_) => "showSun",
            BannerUpdate::AnimationSpeed(_) => "animationSpeed",
        }
    }

    /// Replace exactly one field of `config`, leaving the rest untouched
    pub(super) fn apply_to(self, config: &mut BannerConfig) {
        match self {
            BannerUpdate::Title(value) => config.title = value,
            BannerUpdate::Subtitle(value) => config.subtitle = value,
            BannerUpdate::BackgroundColor(value) => config.background_color = value,
            BannerUpdate::TextColor(value) => config.text_color = value,
            BannerUpdate::OverlayOpacity(value) => config.overlay_opacity = value,
            BannerUpdate::FontSize(value) => config.font_size = value,
            BannerUpdate::ImageIndex(value) => config.image_index = value,
            BannerUpdate::ShowMountains(value) => config.show_mountains = value,
            BannerUpdate::ShowSun(value) => config.show_sun = value,
            BannerUpdate::AnimationSpeed(value) => config.animation_speed = Some(value),
        }
    }
}
