use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use super::model::{AvocadoType, SaleDataset, SaleRecord};
use crate::config::DATE_FORMAT;
use crate::error::DataLoadError;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

const COL_DATE: &str = "Date";
const COL_REGION: &str = "region";
const COL_TYPE: &str = "type";
const COL_PRICE: &str = "AveragePrice";
const COL_VOLUME: &str = "Total Volume";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the sales dataset from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<SaleDataset, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    log::info!(
        "Loaded {} records from {} ({} regions, {} types)",
        dataset.len(),
        path.display(),
        dataset.regions().len(),
        dataset.types().len()
    );
    Ok(dataset)
}

/// Parse CSV text with a header row into a date-sorted dataset.
///
/// Required columns: `Date`, `region`, `type`, `AveragePrice`, `Total Volume`.
/// Any other columns are ignored. The first bad row aborts the load, and a
/// file without data rows is rejected since it has no date range to offer.
pub fn load_reader<R: Read>(reader: R) -> Result<SaleDataset, DataLoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let columns = Columns::locate(reader.headers()?)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let raw = result?;
        records.push(columns.parse_row(&raw, row)?);
    }
    if records.is_empty() {
        return Err(DataLoadError::NoRecords);
    }

    Ok(SaleDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Positions of the required columns in the header.
struct Columns {
    date: usize,
    region: usize,
    avocado_type: usize,
    price: usize,
    volume: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(DataLoadError::MissingColumn(name))
        };
        Ok(Columns {
            date: find(COL_DATE)?,
            region: find(COL_REGION)?,
            avocado_type: find(COL_TYPE)?,
            price: find(COL_PRICE)?,
            volume: find(COL_VOLUME)?,
        })
    }

    fn parse_row(&self, raw: &StringRecord, row: usize) -> Result<SaleRecord, DataLoadError> {
        let field = |idx: usize| raw.get(idx).unwrap_or("").trim();

        let date_text = field(self.date);
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
            DataLoadError::InvalidDate {
                row,
                value: date_text.to_string(),
            }
        })?;

        let type_text = field(self.avocado_type);
        let avocado_type =
            AvocadoType::from_name(type_text).ok_or_else(|| DataLoadError::UnknownType {
                row,
                value: type_text.to_string(),
            })?;

        Ok(SaleRecord {
            date,
            region: field(self.region).to_string(),
            avocado_type,
            average_price: parse_number(field(self.price), row, COL_PRICE)?,
            total_volume: parse_number(field(self.volume), row, COL_VOLUME)?,
        })
    }
}

fn parse_number(s: &str, row: usize, column: &'static str) -> Result<f64, DataLoadError> {
    s.parse::<f64>().map_err(|_| DataLoadError::InvalidNumber {
        row,
        column,
        value: s.to_string(),
    })
}
