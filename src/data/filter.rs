use chrono::NaiveDate;

use super::model::{SaleDataset, SaleRecord};
use crate::config::{DEFAULT_REGION, DEFAULT_TYPE};

// ---------------------------------------------------------------------------
// Filter selection: the four values driven by the UI controls
// ---------------------------------------------------------------------------

/// Current region, type and inclusive date range.
///
/// Values are not validated against the dataset: a region or type that does
/// not occur, or `start_date > end_date`, simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub region: String,
    pub avocado_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FilterSelection {
    /// Startup selection: the default region/type when the data has them
    /// (otherwise the first of each), spanning the whole date range.
    ///
    /// Returns `None` for an empty dataset, which has no date range.
    pub fn initial(dataset: &SaleDataset) -> Option<Self> {
        let bounds = dataset.date_bounds()?;

        let region = dataset
            .regions()
            .iter()
            .find(|r| r.as_str() == DEFAULT_REGION)
            .or_else(|| dataset.regions().first())?
            .clone();

        let avocado_type = dataset
            .types()
            .iter()
            .find(|t| t.as_str() == DEFAULT_TYPE)
            .or_else(|| dataset.types().first())?
            .as_str()
            .to_string();

        Some(FilterSelection {
            region,
            avocado_type,
            start_date: bounds.min,
            end_date: bounds.max,
        })
    }

    /// The row predicate. Both date bounds are inclusive.
    pub fn matches(&self, record: &SaleRecord) -> bool {
        record.region == self.region
            && record.avocado_type.as_str() == self.avocado_type
            && self.start_date <= record.date
            && record.date <= self.end_date
    }
}

// ---------------------------------------------------------------------------
// Query engine
// ---------------------------------------------------------------------------

/// Records passing `selection`, borrowed from the dataset in its date order.
pub fn filter_records<'a>(
    dataset: &'a SaleDataset,
    selection: &FilterSelection,
) -> Vec<&'a SaleRecord> {
    dataset
        .records()
        .iter()
        .filter(|record| selection.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AvocadoType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, region: &str, avocado_type: AvocadoType, price: f64) -> SaleRecord {
        SaleRecord {
            date: d,
            region: region.to_string(),
            avocado_type,
            average_price: price,
            total_volume: price * 1000.0,
        }
    }

    fn selection(region: &str, avocado_type: &str, start: NaiveDate, end: NaiveDate) -> FilterSelection {
        FilterSelection {
            region: region.to_string(),
            avocado_type: avocado_type.to_string(),
            start_date: start,
            end_date: end,
        }
    }

    fn albany_only() -> SaleDataset {
        SaleDataset::from_records(vec![record(
            date(2017, 3, 5),
            "Albany",
            AvocadoType::Organic,
            1.49,
        )])
    }

    fn mixed() -> SaleDataset {
        let mut records = Vec::new();
        for (i, region) in ["Albany", "Boise", "Chicago"].iter().enumerate() {
            for week in 0..20 {
                let d = date(2015, 1, 4) + chrono::Duration::weeks(week);
                records.push(record(d, region, AvocadoType::Organic, 1.0 + i as f64));
                records.push(record(d, region, AvocadoType::Conventional, 0.5 + i as f64));
            }
        }
        SaleDataset::from_records(records)
    }

    #[test]
    fn single_matching_record_is_returned() {
        let ds = albany_only();
        let out = filter_records(
            &ds,
            &selection("Albany", "organic", date(2017, 1, 1), date(2017, 12, 31)),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], &ds.records()[0]);
        assert!((out[0].average_price - 1.49).abs() < 1e-12);
    }

    #[test]
    fn type_mismatch_yields_empty() {
        let ds = albany_only();
        let out = filter_records(
            &ds,
            &selection("Albany", "conventional", date(2017, 1, 1), date(2017, 12, 31)),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn unknown_region_or_type_yields_empty() {
        let ds = mixed();
        let all = (date(2015, 1, 1), date(2016, 1, 1));
        assert!(filter_records(&ds, &selection("Atlantis", "organic", all.0, all.1)).is_empty());
        assert!(filter_records(&ds, &selection("Albany", "Organic", all.0, all.1)).is_empty());
    }

    #[test]
    fn result_is_exactly_the_records_satisfying_the_predicate() {
        let ds = mixed();
        let sel = selection("Boise", "conventional", date(2015, 2, 1), date(2015, 3, 29));
        let out = filter_records(&ds, &sel);

        assert!(!out.is_empty());
        for r in &out {
            assert_eq!(r.region, "Boise");
            assert_eq!(r.avocado_type, AvocadoType::Conventional);
            assert!(r.date >= sel.start_date && r.date <= sel.end_date);
        }
        let outside = ds
            .records()
            .iter()
            .filter(|r| !out.iter().any(|o| std::ptr::eq(*o, *r)))
            .filter(|r| sel.matches(r))
            .count();
        assert_eq!(outside, 0);

        // date order preserved
        assert!(out.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn same_inputs_give_same_output() {
        let ds = mixed();
        let sel = selection("Chicago", "organic", date(2015, 1, 4), date(2015, 5, 17));
        let a = filter_records(&ds, &sel);
        let b = filter_records(&ds, &sel);
        assert_eq!(a, b);
    }

    #[test]
    fn equal_bounds_select_that_exact_date() {
        let ds = mixed();
        let day = date(2015, 1, 18);
        let out = filter_records(&ds, &selection("Albany", "organic", day, day));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, day);
    }

    #[test]
    fn inverted_range_yields_empty() {
        let ds = mixed();
        let out = filter_records(
            &ds,
            &selection("Albany", "organic", date(2015, 3, 1), date(2015, 2, 1)),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn initial_selection_prefers_defaults_and_spans_all_dates() {
        let ds = mixed();
        let sel = FilterSelection::initial(&ds).unwrap();
        assert_eq!(sel.region, "Albany");
        assert_eq!(sel.avocado_type, "organic");
        let bounds = ds.date_bounds().unwrap();
        assert_eq!((sel.start_date, sel.end_date), (bounds.min, bounds.max));
    }

    #[test]
    fn initial_selection_falls_back_to_first_values() {
        let ds = SaleDataset::from_records(vec![
            record(date(2016, 1, 3), "Denver", AvocadoType::Conventional, 1.0),
            record(date(2016, 1, 3), "Boston", AvocadoType::Conventional, 1.0),
        ]);
        let sel = FilterSelection::initial(&ds).unwrap();
        assert_eq!(sel.region, "Boston");
        assert_eq!(sel.avocado_type, "conventional");
        assert!(FilterSelection::initial(&SaleDataset::from_records(Vec::new())).is_none());
    }
}
