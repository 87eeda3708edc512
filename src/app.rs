use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

/// Gap between the two chart cards.
const CHART_SPACING: f32 = 12.0;
const MIN_CHART_HEIGHT: f32 = 220.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AvocadoApp {
    pub state: AppState,
}

impl AvocadoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state }
    }
}

impl eframe::App for AvocadoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: heading + filters ----
        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            ui.add_space(6.0);
            panels::header(ui);
            ui.separator();
            panels::filter_bar(ui, &mut self.state);
            ui.add_space(6.0);
        });

        // ---- Central panel: price and volume charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let charts = self.state.charts();
            let card_height =
                ((ui.available_height() - 3.0 * CHART_SPACING) / 2.0 - 40.0).max(MIN_CHART_HEIGHT);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        plot::time_series(ui, "price-chart", &charts.price, card_height);
                    });
                    ui.add_space(CHART_SPACING);
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        plot::time_series(ui, "volume-chart", &charts.volume, card_height);
                    });
                });
        });
    }
}
