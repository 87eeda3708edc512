use chrono::{Datelike, NaiveDate};
use eframe::egui::{RichText, Ui};
use egui_plot::{GridMark, Line, Plot, PlotPoints};

use crate::chart::{format_value, ChartSeries};
use crate::color;

// ---------------------------------------------------------------------------
// Time-series chart
// ---------------------------------------------------------------------------

/// Render one chart: left-anchored title above a single line plot.
///
/// Dates are plotted as day numbers since the common era.
pub fn time_series(ui: &mut Ui, id: &str, series: &ChartSeries, height: f32) {
    ui.horizontal(|ui: &mut Ui| {
        ui.add_space(ui.available_width() * series.title_x as f32);
        ui.heading(&series.title);
    });

    if series.is_empty() {
        ui.label(RichText::new("No data for this selection").weak());
    }

    let points: PlotPoints = series
        .x
        .iter()
        .zip(series.y.iter())
        .map(|(&date, &y)| [day_number(date), y])
        .collect();

    let line = Line::new(&series.title, points)
        .color(color::accent(&series.color))
        .width(2.0);

    let interactive = !series.fixed_range;
    let tick_prefix = series.y_tick_prefix.clone();
    let hover_prefix = series.y_tick_prefix.clone();
    let hover_decimals = series.hover_decimals;

    Plot::new(id)
        .height(height)
        .allow_zoom(interactive)
        .allow_drag(interactive)
        .allow_scroll(interactive)
        .allow_boxed_zoom(interactive)
        .allow_double_click_reset(interactive)
        .x_axis_formatter(|mark, _range| {
            from_day_number(mark.value)
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_default()
        })
        .y_axis_formatter(move |mark, _range| {
            format_value(tick_prefix.as_deref(), Some(tick_decimals(&mark)), mark.value)
        })
        .label_formatter(move |_name, point| {
            let date = from_day_number(point.x)
                .map(|d| d.to_string())
                .unwrap_or_default();
            let value = format_value(hover_prefix.as_deref(), hover_decimals, point.y);
            format!("{date}\n{value}")
        })
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn from_day_number(value: f64) -> Option<NaiveDate> {
    if !value.is_finite() {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(value.round() as i32)
}

/// Enough decimals to tell adjacent ticks apart.
fn tick_decimals(mark: &GridMark) -> usize {
    if mark.step_size >= 1.0 {
        0
    } else {
        (-mark.step_size.log10() - 1e-9).ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_numbers_round_trip() {
        let d = NaiveDate::from_ymd_opt(2017, 3, 5).unwrap();
        assert_eq!(from_day_number(day_number(d)), Some(d));
        assert_eq!(from_day_number(day_number(d) + 0.4), Some(d));
        assert_eq!(from_day_number(f64::NAN), None);
    }

    #[test]
    fn tick_precision_follows_step() {
        let mark = |step_size| GridMark { value: 0.0, step_size };
        assert_eq!(tick_decimals(&mark(1000.0)), 0);
        assert_eq!(tick_decimals(&mark(0.1)), 1);
        assert_eq!(tick_decimals(&mark(0.05)), 2);
    }
}
