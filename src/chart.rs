//! Chart projector: filtered records → the two fixed time-series charts.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::data::model::SaleRecord;

pub const PRICE_TITLE: &str = "Average Price of Avocados";
pub const VOLUME_TITLE: &str = "Avocados Sold";
pub const PRICE_COLOR: &str = "#17B897";
pub const VOLUME_COLOR: &str = "#E12D39";

/// Horizontal title position, as a fraction of the plot width.
const TITLE_X: f64 = 0.05;

/// One line chart: x/y data plus its static presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    /// Prefix for y-axis tick labels and hover values (e.g. `$`).
    pub y_tick_prefix: Option<String>,
    /// Decimal places shown on hover; `None` shows the raw value.
    pub hover_decimals: Option<usize>,
    /// Hex accent colour of the line.
    pub color: String,
    pub title_x: f64,
    /// Axis ranges follow the data; zoom and pan are disabled.
    pub fixed_range: bool,
    pub show_toolbar: bool,
}

impl ChartSeries {
    fn line(title: &str, color: &str, points: impl Iterator<Item = (NaiveDate, f64)>) -> Self {
        let (x, y) = points.unzip();
        ChartSeries {
            title: title.to_string(),
            x,
            y,
            y_tick_prefix: None,
            hover_decimals: None,
            color: color.to_string(),
            title_x: TITLE_X,
            fixed_range: true,
            show_toolbar: false,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Borrowing view of this chart in Plotly's figure layout
    /// (`{"data": [...], "layout": {...}, "config": {...}}`).
    pub fn figure(&self) -> Figure<'_> {
        let hovertemplate = self.hover_decimals.map(|decimals| {
            let prefix = self.y_tick_prefix.as_deref().unwrap_or("");
            format!("{prefix}%{{y:.{decimals}f}}<extra></extra>")
        });

        Figure {
            data: [Trace {
                x: &self.x,
                y: &self.y,
                kind: "lines",
                hovertemplate,
            }],
            layout: Layout {
                title: Title {
                    text: &self.title,
                    x: self.title_x,
                    xanchor: "left",
                },
                xaxis: Axis {
                    fixedrange: self.fixed_range,
                    tickprefix: None,
                },
                yaxis: Axis {
                    fixedrange: self.fixed_range,
                    tickprefix: self.y_tick_prefix.as_deref(),
                },
                colorway: [self.color.as_str()],
            },
            config: FigureConfig {
                display_mode_bar: self.show_toolbar,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Plotly figure layout
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct Figure<'a> {
    data: [Trace<'a>; 1],
    layout: Layout<'a>,
    config: FigureConfig,
}

#[derive(Debug, Serialize)]
struct Trace<'a> {
    /// Dates serialize as `YYYY-MM-DD`.
    x: &'a [NaiveDate],
    y: &'a [f64],
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hovertemplate: Option<String>,
}

#[derive(Debug, Serialize)]
struct Layout<'a> {
    title: Title<'a>,
    xaxis: Axis<'a>,
    yaxis: Axis<'a>,
    colorway: [&'a str; 1],
}

#[derive(Debug, Serialize)]
struct Title<'a> {
    text: &'a str,
    x: f64,
    xanchor: &'static str,
}

#[derive(Debug, Serialize)]
struct Axis<'a> {
    fixedrange: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tickprefix: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FigureConfig {
    display_mode_bar: bool,
}

/// Prefix `value` and round it to `decimals` places when given.
pub fn format_value(prefix: Option<&str>, decimals: Option<usize>, value: f64) -> String {
    let prefix = prefix.unwrap_or("");
    match decimals {
        Some(decimals) => format!("{prefix}{value:.decimals$}"),
        None => format!("{prefix}{value}"),
    }
}

/// The price and volume charts for one filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPair {
    pub price: ChartSeries,
    pub volume: ChartSeries,
}

impl ChartPair {
    /// Write both figures as pretty JSON into `dir` (created if missing).
    ///
    /// Returns the written paths, price first.
    pub fn write_figures(&self, dir: &Path) -> Result<[PathBuf; 2]> {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

        let price = dir.join("price-chart.json");
        let volume = dir.join("volume-chart.json");
        write_figure(&price, &self.price)?;
        write_figure(&volume, &self.volume)?;
        Ok([price, volume])
    }
}

fn write_figure(path: &Path, series: &ChartSeries) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &series.figure())
        .with_context(|| format!("writing {}", path.display()))
}

/// Build both charts from `records`, keeping their order.
///
/// An empty slice gives two charts with no points.
pub fn project(records: &[&SaleRecord]) -> ChartPair {
    let mut price = ChartSeries::line(
        PRICE_TITLE,
        PRICE_COLOR,
        records.iter().map(|r| (r.date, r.average_price)),
    );
    price.y_tick_prefix = Some("$".to_string());
    price.hover_decimals = Some(2);

    let volume = ChartSeries::line(
        VOLUME_TITLE,
        VOLUME_COLOR,
        records.iter().map(|r| (r.date, r.total_volume)),
    );

    ChartPair { price, volume }
}
