/// Data layer: record types, loading, and filtering.
///
/// Architecture:
/// ```text
///    avocado.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + sort by date → SaleDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ SaleDataset  │  Vec<SaleRecord>, regions, types (immutable)
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection predicate → borrowed rows
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
