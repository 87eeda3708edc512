use std::path::Path;

use eframe::egui::{self, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::config::{DESCRIPTION, EXPORT_DIR, HEADING};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(HEADING).size(26.0).strong());
        ui.label(DESCRIPTION);
    });
}

// ---------------------------------------------------------------------------
// Filter controls
// ---------------------------------------------------------------------------

/// Region, type and date-range controls. Changes go straight to `state`,
/// which recomputes the charts.
pub fn filter_bar(ui: &mut Ui, state: &mut AppState) {
    let mut region_pick: Option<String> = None;
    let mut type_pick: Option<&'static str> = None;

    ui.horizontal(|ui: &mut Ui| {
        let selection = state.selection();

        ui.vertical(|ui: &mut Ui| {
            ui.strong("Region");
            egui::ComboBox::from_id_salt("region-filter")
                .selected_text(&selection.region)
                .width(180.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for region in state.dataset().regions() {
                        if ui
                            .selectable_label(selection.region == *region, region)
                            .clicked()
                        {
                            region_pick = Some(region.clone());
                        }
                    }
                });
        });

        ui.add_space(16.0);

        ui.vertical(|ui: &mut Ui| {
            ui.strong("Type");
            let current = state
                .dataset()
                .types()
                .iter()
                .find(|t| t.as_str() == selection.avocado_type)
                .map(|t| t.label())
                .unwrap_or(selection.avocado_type.as_str());
            egui::ComboBox::from_id_salt("type-filter")
                .selected_text(current)
                .width(140.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for t in state.dataset().types() {
                        if ui
                            .selectable_label(selection.avocado_type == t.as_str(), t.label())
                            .clicked()
                        {
                            type_pick = Some(t.as_str());
                        }
                    }
                });
        });
    });

    // Date pickers mutate local copies; the state clamps them into bounds.
    let bounds = state.bounds();
    let years = bounds.years();
    let mut export = false;
    let mut start = state.selection().start_date;
    let mut end = state.selection().end_date;

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Date Range");
        ui.add(
            DatePickerButton::new(&mut start)
                .id_salt("date-range-start")
                .start_end_years(years.clone()),
        );
        ui.label("–");
        ui.add(
            DatePickerButton::new(&mut end)
                .id_salt("date-range-end")
                .start_end_years(years),
        );
        ui.label(
            RichText::new(format!("available {} to {}", bounds.min, bounds.max))
                .small()
                .weak(),
        );
        ui.separator();
        ui.label(format!("{} weeks shown", state.visible_count()));
        ui.separator();
        export = ui.button("Export charts").clicked();
        if let Some(status) = state.status() {
            ui.label(RichText::new(status).small());
        }
    });

    if let Some(region) = region_pick {
        state.set_region(&region);
    }
    if let Some(avocado_type) = type_pick {
        state.set_type(avocado_type);
    }
    if start != state.selection().start_date {
        state.set_start_date(start);
    }
    if end != state.selection().end_date {
        state.set_end_date(end);
    }
    if export {
        state.export_charts(Path::new(EXPORT_DIR));
    }
}
