use anyhow::{Context, Result};
use avocado_analytics::config::{DATA_PATH, DATE_FORMAT};
use chrono::{Datelike, Duration, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

/// Fixed seed so the generated file is reproducible.
const SEED: u64 = 42;

const HEADER: [&str; 14] = [
    "",
    "Date",
    "AveragePrice",
    "Total Volume",
    "4046",
    "4225",
    "4770",
    "Total Bags",
    "Small Bags",
    "Large Bags",
    "XLarge Bags",
    "type",
    "year",
    "region",
];

/// Region name and relative market size.
const REGIONS: [(&str, f64); 8] = [
    ("Albany", 0.1),
    ("Atlanta", 0.5),
    ("Boise", 0.08),
    ("Chicago", 0.9),
    ("Denver", 0.6),
    ("LosAngeles", 2.8),
    ("Seattle", 0.55),
    ("TotalUS", 30.0),
];

/// Type name, base price, share of volume.
const TYPES: [(&str, f64, f64); 2] = [("conventional", 1.15, 0.97), ("organic", 1.60, 0.03)];

fn money(v: f64) -> String {
    format!("{v:.2}")
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let price_noise = Normal::new(0.0, 0.06).context("price noise distribution")?;
    let volume_noise = Normal::new(0.0, 0.08).context("volume noise distribution")?;

    // Weekly Sundays, 2015-01-04 → 2018-03-25
    let first = NaiveDate::from_ymd_opt(2015, 1, 4).context("invalid start date")?;
    let last = NaiveDate::from_ymd_opt(2018, 3, 25).context("invalid end date")?;
    let weeks: Vec<NaiveDate> = (0..)
        .map(|w| first + Duration::weeks(w))
        .take_while(|d| *d <= last)
        .collect();

    let mut writer = csv::Writer::from_path(DATA_PATH)
        .with_context(|| format!("creating {DATA_PATH}"))?;
    writer.write_record(HEADER)?;

    let mut rows = 0usize;
    for &(avocado_type, base_price, share) in &TYPES {
        for &(region, size) in &REGIONS {
            for (idx, date) in weeks.iter().enumerate() {
                // Season term peaks in early April: volumes are highest then,
                // prices lowest, with prices topping out around October.
                let season = (date.ordinal() as f64 / 365.25 * 2.0 * std::f64::consts::PI).sin();
                let price = (base_price - 0.2 * season + price_noise.sample(&mut rng)).max(0.44);
                let volume =
                    (1.0e6 * size * share * (1.0 + 0.25 * season + volume_noise.sample(&mut rng))).max(100.0);

                let plu_4046 = volume * 0.35;
                let plu_4225 = volume * 0.30;
                let plu_4770 = volume * 0.02;
                let bags = volume - plu_4046 - plu_4225 - plu_4770;

                writer.write_record([
                    idx.to_string(),
                    date.format(DATE_FORMAT).to_string(),
                    money(price),
                    money(volume),
                    money(plu_4046),
                    money(plu_4225),
                    money(plu_4770),
                    money(bags),
                    money(bags * 0.75),
                    money(bags * 0.24),
                    money(bags * 0.01),
                    avocado_type.to_string(),
                    date.year().to_string(),
                    region.to_string(),
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush()?;

    println!(
        "Wrote {rows} rows ({} weeks × {} regions × {} types) to {DATA_PATH}",
        weeks.len(),
        REGIONS.len(),
        TYPES.len()
    );
    Ok(())
}
