/// Data layer: core types, loading, enrichment, and the query library.
///
/// Architecture:
/// ```text
///  athlete_events.csv   noc_regions.csv
///        │                    │
///        ▼                    ▼
///   ┌──────────┐         ┌──────────┐
///   │  loader   │────────│  loader   │   parse files → raw records
///   └──────────┘         └──────────┘
///        │                    │
///        └───────┬────────────┘
///                ▼
///        ┌──────────────┐
///        │  preprocess   │   Summer filter, join, dedup → OlympicsDataset
///        └──────────────┘
///                │
///                ▼
///        ┌──────────────┐
///        │    query      │   pure aggregations → derived tables for the UI
///        └──────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod preprocess;
pub mod query;
