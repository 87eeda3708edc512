use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

// ---------------------------------------------------------------------------
// AvocadoType
// ---------------------------------------------------------------------------

/// The two avocado types present in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AvocadoType {
    Conventional,
    Organic,
}

impl AvocadoType {
    /// Parse the raw `type` column value. Matching is exact, as in the data.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "conventional" => Some(AvocadoType::Conventional),
            "organic" => Some(AvocadoType::Organic),
            _ => None,
        }
    }

    /// Value used for filtering (lowercase, as stored in the CSV).
    pub fn as_str(self) -> &'static str {
        match self {
            AvocadoType::Conventional => "conventional",
            AvocadoType::Organic => "organic",
        }
    }

    /// Title-cased label for the type selector.
    pub fn label(self) -> &'static str {
        match self {
            AvocadoType::Conventional => "Conventional",
            AvocadoType::Organic => "Organic",
        }
    }
}

impl fmt::Display for AvocadoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SaleRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// Avocado sales for one region/type/week.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub region: String,
    pub avocado_type: AvocadoType,
    pub average_price: f64,
    pub total_volume: f64,
}

// ---------------------------------------------------------------------------
// DateBounds
// ---------------------------------------------------------------------------

/// Inclusive global date range of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    /// Calendar years the date pickers may navigate to.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.min.year()..=self.max.year()
    }

    /// Pull `date` into the allowed range.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// SaleDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Loaded records sorted by date, plus the lookup lists for the selectors.
///
/// Fields are private: once built, a dataset is never mutated.
#[derive(Debug, Clone)]
pub struct SaleDataset {
    records: Vec<SaleRecord>,
    regions: Vec<String>,
    types: Vec<AvocadoType>,
}

impl SaleDataset {
    /// Sort records chronologically and derive the distinct regions and types.
    ///
    /// The sort is stable, so rows sharing a date keep their file order.
    pub fn from_records(mut records: Vec<SaleRecord>) -> Self {
        records.sort_by_key(|r| r.date);

        let regions: BTreeSet<&str> = records.iter().map(|r| r.region.as_str()).collect();
        let types: BTreeSet<AvocadoType> = records.iter().map(|r| r.avocado_type).collect();

        SaleDataset {
            regions: regions.into_iter().map(str::to_string).collect(),
            types: types.into_iter().collect(),
            records,
        }
    }

    /// All records, ascending by date.
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Distinct regions, sorted.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Distinct types, sorted by name.
    pub fn types(&self) -> &[AvocadoType] {
        &self.types
    }

    /// Global min/max date, `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<DateBounds> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some(DateBounds {
            min: first.date,
            max: last.date,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
