//! Fixed configuration. The dashboard takes no flags; logging verbosity is
//! the only runtime knob (`RUST_LOG`, read by `env_logger`).

/// Source CSV, resolved against the working directory.
pub const DATA_PATH: &str = "avocado.csv";

pub const WINDOW_TITLE: &str = "Avocado Analytics: Understand Your Avocados!";
pub const HEADING: &str = "Avocado Analytics 🥑";
pub const DESCRIPTION: &str = "Analyze the behavior of avocado prices and the number of \
     avocados sold in the US between 2015 and 2018";

/// Initial selection; replaced by the first available value when absent from the data.
pub const DEFAULT_REGION: &str = "Albany";
pub const DEFAULT_TYPE: &str = "organic";

pub const WINDOW_SIZE: [f32; 2] = [1200.0, 860.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

/// Directory the "Export charts" button writes Plotly figures into.
pub const EXPORT_DIR: &str = "figures";

/// Date format of the `Date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
