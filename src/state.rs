use std::path::Path;

use chrono::NaiveDate;

use crate::chart::{project, ChartPair};
use crate::data::filter::{filter_records, FilterSelection};
use crate::data::model::{DateBounds, SaleDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The dashboard state, independent of rendering.
///
/// The dataset is fixed at construction; only the selection changes, and
/// every change recomputes the charts.
pub struct AppState {
    dataset: SaleDataset,
    bounds: DateBounds,
    selection: FilterSelection,
    /// Number of records behind the current charts.
    visible: usize,
    charts: ChartPair,
    /// Outcome of the last export, shown next to the controls.
    status: Option<String>,
}

impl AppState {
    /// Build the initial state. `None` when the dataset has no records.
    pub fn new(dataset: SaleDataset) -> Option<Self> {
        let bounds = dataset.date_bounds()?;
        let selection = FilterSelection::initial(&dataset)?;
        let mut state = AppState {
            dataset,
            bounds,
            selection,
            visible: 0,
            charts: project(&[]),
            status: None,
        };
        state.refresh();
        Some(state)
    }

    pub fn dataset(&self) -> &SaleDataset {
        &self.dataset
    }

    /// Allowed range for the date pickers: the dataset's min/max date.
    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn charts(&self) -> &ChartPair {
        &self.charts
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Write the current charts as Plotly figures into `dir`.
    pub fn export_charts(&mut self, dir: &Path) {
        self.status = Some(match self.charts.write_figures(dir) {
            Ok([price, volume]) => {
                log::info!("Exported {} and {}", price.display(), volume.display());
                format!("Exported to {}", dir.display())
            }
            Err(e) => {
                log::error!("Chart export failed: {e:#}");
                format!("Export failed: {e:#}")
            }
        });
    }

    pub fn set_region(&mut self, region: &str) {
        if self.selection.region != region {
            self.selection.region = region.to_string();
            self.refresh();
        }
    }

    pub fn set_type(&mut self, avocado_type: &str) {
        if self.selection.avocado_type != avocado_type {
            self.selection.avocado_type = avocado_type.to_string();
            self.refresh();
        }
    }

    /// Set the range start, clamped into [`Self::bounds`].
    pub fn set_start_date(&mut self, date: NaiveDate) {
        let date = self.bounds.clamp(date);
        if self.selection.start_date != date {
            self.selection.start_date = date;
            self.refresh();
        }
    }

    /// Set the range end, clamped into [`Self::bounds`].
    pub fn set_end_date(&mut self, date: NaiveDate) {
        let date = self.bounds.clamp(date);
        if self.selection.end_date != date {
            self.selection.end_date = date;
            self.refresh();
        }
    }

    /// Re-run the query and projection for the current selection.
    fn refresh(&mut self) {
        let rows = filter_records(&self.dataset, &self.selection);
        log::debug!(
            "Filter {} / {} / {}..={} matched {} rows",
            self.selection.region,
            self.selection.avocado_type,
            self.selection.start_date,
            self.selection.end_date,
            rows.len()
        );
        self.visible = rows.len();
        self.charts = project(&rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AvocadoType, SaleRecord};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> SaleDataset {
        let mut records = Vec::new();
        let mut d = date(2015, 1, 4);
        while d <= date(2018, 3, 25) {
            for region in ["Albany", "Boise"] {
                for t in [AvocadoType::Conventional, AvocadoType::Organic] {
                    records.push(SaleRecord {
                        date: d,
                        region: region.to_string(),
                        avocado_type: t,
                        average_price: 1.25,
                        total_volume: 500.0,
                    });
                }
            }
            d += chrono::Duration::weeks(1);
        }
        SaleDataset::from_records(records)
    }

    #[test]
    fn picker_bounds_equal_dataset_extremes() {
        let state = AppState::new(dataset()).unwrap();
        assert_eq!(state.bounds().min, date(2015, 1, 4));
        assert_eq!(state.bounds().max, date(2018, 3, 25));
        assert_eq!(state.selection().start_date, date(2015, 1, 4));
        assert_eq!(state.selection().end_date, date(2018, 3, 25));
    }

    #[test]
    fn initial_charts_cover_default_selection() {
        let state = AppState::new(dataset()).unwrap();
        let expected = state
            .dataset()
            .records()
            .iter()
            .filter(|r| r.region == "Albany" && r.avocado_type == AvocadoType::Organic)
            .count();
        assert_eq!(state.visible_count(), expected);
        assert_eq!(state.charts().price.len(), expected);
        assert_eq!(state.charts().volume.len(), expected);
    }

    #[test]
    fn changing_selection_recomputes_charts() {
        let mut state = AppState::new(dataset()).unwrap();
        state.set_start_date(date(2016, 1, 3));
        state.set_end_date(date(2016, 1, 3));
        assert_eq!(state.visible_count(), 1);
        assert_eq!(state.charts().price.x, vec![date(2016, 1, 3)]);

        state.set_region("Nowhere");
        assert_eq!(state.visible_count(), 0);
        assert!(state.charts().price.is_empty());
        assert!(state.charts().volume.is_empty());

        state.set_region("Boise");
        state.set_type("conventional");
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn dates_are_clamped_to_bounds() {
        let mut state = AppState::new(dataset()).unwrap();
        state.set_start_date(date(2010, 1, 1));
        state.set_end_date(date(2030, 1, 1));
        assert_eq!(state.selection().start_date, state.bounds().min);
        assert_eq!(state.selection().end_date, state.bounds().max);
    }

    #[test]
    fn inverted_range_renders_empty_charts() {
        let mut state = AppState::new(dataset()).unwrap();
        state.set_start_date(date(2017, 1, 1));
        state.set_end_date(date(2016, 1, 1));
        assert_eq!(state.visible_count(), 0);
        assert!(state.charts().price.is_empty());
    }

    #[test]
    fn export_writes_current_selection() {
        let mut state = AppState::new(dataset()).unwrap();
        state.set_start_date(date(2016, 1, 3));
        state.set_end_date(date(2016, 1, 10));

        let dir = std::env::temp_dir().join(format!(
            "avocado-analytics-export-{}",
            std::process::id()
        ));
        state.export_charts(&dir);
        let text = std::fs::read_to_string(dir.join("price-chart.json"));
        std::fs::remove_dir_all(&dir).ok();

        assert!(state.status().unwrap().starts_with("Exported"));
        let fig: serde_json::Value = serde_json::from_str(&text.unwrap()).unwrap();
        assert_eq!(
            fig["data"][0]["x"],
            serde_json::json!(["2016-01-03", "2016-01-10"])
        );
    }

    #[test]
    fn failed_export_is_reported() {
        let mut state = AppState::new(dataset()).unwrap();
        let file = std::env::temp_dir().join(format!(
            "avocado-analytics-not-a-dir-{}",
            std::process::id()
        ));
        std::fs::write(&file, "").unwrap();
        state.export_charts(&file);
        std::fs::remove_file(&file).ok();

        assert!(state.status().unwrap().starts_with("Export failed"));
    }

    #[test]
    fn empty_dataset_has_no_state() {
        assert!(AppState::new(SaleDataset::from_records(Vec::new())).is_none());
    }
}
