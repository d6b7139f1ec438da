//! Studio window implemented with egui/eframe

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::info;

use crate::config::{BannerConfig, ConfigStore};
use crate::preview::{Banner, ImageCatalog};

use super::components::control_panel::{self, ControlPanelState};
use super::constants::*;

struct BannerApp {
    store: ConfigStore,
    banner: Banner,
    panel: ControlPanelState,
}

impl BannerApp {
    fn new(_cc: &CreationContext<'_>, initial: BannerConfig, catalog: ImageCatalog) -> Self {
        info!(
            images = catalog.len(),
            animation_speed = ?initial.animation_speed,
            "Initializing banner studio"
        );

        Self {
            store: ConfigStore::new(initial),
            banner: Banner::new(catalog),
            panel: ControlPanelState::new(),
        }
    }
}

impl eframe::App for BannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let banner_height = (ui.available_height() * BANNER_HEIGHT_FRACTION).max(BANNER_MIN_HEIGHT);
                self.banner.show(ui, self.store.snapshot(), banner_height);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Frame::NONE
                        .inner_margin(egui::Margin::same(PADDING as i8))
                        .show(ui, |ui| {
                            ui.heading("Customize Your Banner");
                            ui.add_space(SECTION_SPACING);

                            let updates = control_panel::ui(
                                ui,
                                self.store.snapshot(),
                                self.banner.catalog(),
                                &mut self.panel,
                            );
                            self.store.update_all(updates);
                        });
                });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(revisions = self.store.revision(), "Banner studio exiting");
    }
}

pub fn run_gui(initial: BannerConfig, catalog: ImageCatalog) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Banner Studio"),
        ..Default::default()
    };

    eframe::run_native(
        "Banner Studio",
        options,
        Box::new(move |cc| Ok(Box::new(BannerApp::new(cc, initial, catalog)))),
    )
    .map_err(|err| anyhow!("Failed to launch banner studio window: {err}"))
}
