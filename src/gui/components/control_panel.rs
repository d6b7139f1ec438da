use eframe::egui;

use crate::color::{format_css_color, parse_css_color};
use crate::config::{BannerConfig, BannerUpdate};
use crate::gui::constants::*;
use crate::preview::ImageCatalog;

use super::controls::{group_controls, Control, ControlGroup, ControlKind, ControlValue};

/// State for the control panel UI (only the active tab; the config lives in the store)
pub struct ControlPanelState {
    active: ControlGroup,
}

impl ControlPanelState {
    pub fn new() -> Self {
        Self {
            active: ControlGroup::Content,
        }
    }
}

impl Default for ControlPanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the control panel and returns the updates requested this frame.
/// Widgets edit local copies; the store is only touched through the returned updates.
pub fn ui(
    ui: &mut egui::Ui,
    config: &BannerConfig,
    catalog: &ImageCatalog,
    state: &mut ControlPanelState,
) -> Vec<BannerUpdate> {
    let mut updates = Vec::new();

    ui.group(|ui| {
        ui.label(egui::RichText::new("Banner Controls").heading().strong());
        ui.label(
            egui::RichText::new("Customize your banner in real-time with these controls")
                .small()
                .weak(),
        );
        ui.add_space(ITEM_SPACING);

        // Tab strip
        ui.horizontal(|ui| {
            for group in ControlGroup::ALL {
                ui.selectable_value(&mut state.active, group, group.label());
            }
        });
        ui.separator();
        ui.add_space(ITEM_SPACING);

        for control in group_controls(config, catalog, state.active) {
            if let Some(value) = control_ui(ui, &control) {
                updates.extend(control.id.to_update(value));
            }
            ui.add_space(ITEM_SPACING);
        }
    });

    updates
}

/// Draw one control; returns the value it emitted this frame, if any
fn control_ui(ui: &mut egui::Ui, control: &Control) -> Option<ControlValue> {
    let mut emitted = None;

    match &control.kind {
        ControlKind::Text { value, placeholder } => {
            ui.label(control.caption());
            let mut text = value.clone();
            let edit = egui::TextEdit::singleline(&mut text)
                .hint_text(*placeholder)
                .desired_width(f32::INFINITY);
            if ui.add(edit).changed() {
                emitted = Some(ControlValue::Text(text));
            }
        }
        ControlKind::Color { value } => {
            ui.label(control.caption());
            ui.horizontal(|ui| {
                // Swatch only while the stored string is a color we understand
                if let Some(mut color) = parse_css_color(value) {
                    if ui.color_edit_button_srgba(&mut color).changed() {
                        emitted = Some(ControlValue::Text(format_css_color(color)));
                    }
                }

                let mut text = value.clone();
                let edit = egui::TextEdit::singleline(&mut text).desired_width(COLOR_TEXT_WIDTH);
                if ui.add(edit).changed() {
                    emitted = Some(ControlValue::Text(text));
                }
            });
        }
        ControlKind::Range { value, min, max, step } => {
            ui.label(control.caption());
            let mut number = *value;
            let slider = egui::Slider::new(&mut number, *min..=*max)
                .step_by(*step as f64)
                .show_value(false)
                .clamping(egui::SliderClamping::Edits);
            if ui.add(slider).changed() {
                emitted = Some(ControlValue::Number(number));
            }
        }
        ControlKind::Select { selected, placeholder, options } => {
            ui.label(control.caption());
            let selected_text = options
                .iter()
                .find(|option| &option.value == selected)
                .map(|option| option.label.clone())
                .unwrap_or_else(|| placeholder.to_string());

            egui::ComboBox::from_id_salt(format!("banner_control_{:?}", control.id))
                .selected_text(selected_text)
                .width(200.0)
                .show_ui(ui, |ui| {
                    for option in options {
                        if ui
                            .selectable_label(&option.value == selected, &option.label)
                            .clicked()
                        {
                            emitted = Some(ControlValue::Choice(option.value.clone()));
                        }
                    }
                });
        }
        ControlKind::Toggle { checked } => {
            ui.horizontal(|ui| {
                ui.label(control.caption());
                let mut on = *checked;
                if ui.checkbox(&mut on, "").changed() {
                    emitted = Some(ControlValue::Flag(on));
                }
            });
        }
    }

    emitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchConfig;

    #[test]
    fn test_every_tab_renders_without_emitting_updates() {
        let catalog = ImageCatalog::new(LaunchConfig::default().images).unwrap();
        let config = BannerConfig::default();
        let ctx = egui::Context::default();

        for group in ControlGroup::ALL {
            let mut state = ControlPanelState { active: group };
            let mut updates = Vec::new();
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    updates = super::ui(ui, &config, &catalog, &mut state);
                });
            });
            assert!(updates.is_empty(), "{group:?} emitted {updates:?} without input");
            assert_eq!(state.active, group);
        }
    }
}
