/// Data layer: core types, loading, and selection resolution.
///
/// Architecture:
/// ```text
///  data/spacex_launch_dash.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (fatal on error)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, sites, payload bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ resolve   │  Selection → proportion table + scatter indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod resolve;
