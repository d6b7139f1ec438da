//! Control surface model
//!
//! Describes the editing controls for a config snapshot without touching egui,
//! and maps each control's change event to exactly one single-field update.

use tracing::warn;

use crate::config::{BannerConfig, BannerUpdate};
use crate::constants::ranges;
use crate::preview::ImageCatalog;

/// Tab the control belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlGroup {
    Content,
    Colors,
    Image,
    Effects,
}

impl ControlGroup {
    pub const ALL: [ControlGroup; 4] = [
        ControlGroup::Content,
        ControlGroup::Colors,
        ControlGroup::Image,
        ControlGroup::Effects,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ControlGroup::Content => "Content",
            ControlGroup::Colors => "Colors",
            ControlGroup::Image => "Image",
            ControlGroup::Effects => "Effects",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Title,
    Subtitle,
    FontSize,
    BackgroundColor,
    TextColor,
    OverlayOpacity,
    Image,
    Mountains,
    Sun,
    AnimationSpeed,
}

/// A select option: the value reported on change and the text shown
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    Text {
        value: String,
        placeholder: &'static str,
    },
    /// Color swatch paired with a text box, both writing the same field
    Color { value: String },
    Range {
        value: f32,
        min: f32,
        max: f32,
        step: f32,
    },
    Select {
        selected: String,
        placeholder: &'static str,
        options: Vec<SelectOption>,
    },
    Toggle { checked: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub id: ControlId,
    pub label: String,
    pub kind: ControlKind,
}

impl Control {
    /// Value shown next to a range control, one decimal place
    pub fn display_value(&self) -> Option<String> {
        match &self.kind {
            ControlKind::Range { value, .. } => Some(format!("{value:.1}")),
            _ => None,
        }
    }

    /// Label as displayed: `Font Size: 3.0` for ranges, the plain label otherwise
    pub fn caption(&self) -> String {
        match self.display_value() {
            Some(value) => format!("{}: {value}", self.label),
            None => self.label.clone(),
        }
    }
}

/// Raw value emitted by a control's change event
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    Text(String),
    Number(f32),
    Choice(String),
    Flag(bool),
}

impl ControlId {
    pub fn group(&self) -> ControlGroup {
        match self {
            ControlId::Title | ControlId::Subtitle | ControlId::FontSize => ControlGroup::Content,
            ControlId::BackgroundColor | ControlId::TextColor | ControlId::OverlayOpacity => {
                ControlGroup::Colors
            }
            ControlId::Image => ControlGroup::Image,
            ControlId::Mountains | ControlId::Sun | ControlId::AnimationSpeed => ControlGroup::Effects,
        }
    }

    /// Map a change event to its single-field update.
    /// Returns `None` when the value cannot be coerced for this control.
    pub fn to_update(self, value: ControlValue) -> Option<BannerUpdate> {
        let update = match (self, value) {
            (ControlId::Title, ControlValue::Text(text)) => BannerUpdate::Title(text),
            (ControlId::Subtitle, ControlValue::Text(text)) => BannerUpdate::Subtitle(text),
            (ControlId::FontSize, ControlValue::Number(n)) => BannerUpdate::FontSize(n),
            (ControlId::BackgroundColor, ControlValue::Text(text)) => BannerUpdate::BackgroundColor(text),
            (ControlId::TextColor, ControlValue::Text(text)) => BannerUpdate::TextColor(text),
            (ControlId::OverlayOpacity, ControlValue::Number(n)) => BannerUpdate::OverlayOpacity(n),
            (ControlId::Image, ControlValue::Choice(choice)) => match choice.trim().parse::<i32>() {
                Ok(index) => BannerUpdate::ImageIndex(index),
                Err(err) => {
                    warn!(choice = %choice, error = %err, "Ignoring image selection that is not an integer");
                    return None;
                }
            },
            (ControlId::Mountains, ControlValue::Flag(on)) => BannerUpdate::ShowMountains(on),
            (ControlId::Sun, ControlValue::Flag(on)) => BannerUpdate::ShowSun(on),
            (ControlId::AnimationSpeed, ControlValue::Number(n)) => BannerUpdate::AnimationSpeed(n),
            (id, value) => {
                warn!(control = ?id, value = ?value, "Control emitted a value of the wrong kind");
                return None;
            }
        };
        Some(update)
    }
}

fn range(id: ControlId, name: &str, value: f32, (min, max): (f32, f32)) -> Control {
    Control {
        id,
        label: name.to_string(),
        kind: ControlKind::Range {
            value,
            min,
            max,
            step: ranges::STEP,
        },
    }
}

/// Every control for a snapshot, in display order
pub fn controls(config: &BannerConfig, catalog: &ImageCatalog) -> Vec<Control> {
    let mut controls = vec![
        Control {
            id: ControlId::Title,
            label: "Banner Title".to_string(),
            kind: ControlKind::Text {
                value: config.title.clone(),
                placeholder: "Enter banner title",
            },
        },
        Control {
            id: ControlId::Subtitle,
            label: "Banner Subtitle".to_string(),
            kind: ControlKind::Text {
                value: config.subtitle.clone(),
                placeholder: "Enter banner subtitle",
            },
        },
        range(ControlId::FontSize, "Font Size", config.font_size, ranges::FONT_SIZE),
        Control {
            id: ControlId::BackgroundColor,
            label: "Background Color".to_string(),
            kind: ControlKind::Color {
                value: config.background_color.clone(),
            },
        },
        Control {
            id: ControlId::TextColor,
            label: "Text Color".to_string(),
            kind: ControlKind::Color {
                value: config.text_color.clone(),
            },
        },
        range(
            ControlId::OverlayOpacity,
            "Overlay Opacity",
            config.overlay_opacity,
            ranges::OVERLAY_OPACITY,
        ),
        Control {
            id: ControlId::Image,
            label: "Background Image".to_string(),
            kind: ControlKind::Select {
                selected: config.image_index.to_string(),
                placeholder: "Select an image",
                options: catalog
                    .images()
                    .iter()
                    .enumerate()
                    .map(|(index, image)| SelectOption {
                        value: index.to_string(),
                        label: image.label.clone(),
                    })
                    .collect(),
            },
        },
        Control {
            id: ControlId::Mountains,
            label: "Show Mountains".to_string(),
            kind: ControlKind::Toggle {
                checked: config.show_mountains,
            },
        },
        Control {
            id: ControlId::Sun,
            label: "Show Sun".to_string(),
            kind: ControlKind::Toggle {
                checked: config.show_sun,
            },
        },
    ];

    // The only data-driven visibility rule
    if let Some(speed) = config.animation_speed {
        controls.push(range(
            ControlId::AnimationSpeed,
            "Animation Speed",
            speed,
            ranges::ANIMATION_SPEED,
        ));
    }

    controls
}

/// Controls of one tab
pub fn group_controls(config: &BannerConfig, catalog: &ImageCatalog, group: ControlGroup) -> Vec<Control> {
    controls(config, catalog)
        .into_iter()
        .filter(|control| control.id.group() == group)
        .collect()
}
