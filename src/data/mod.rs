/// Data layer: core types, the bundled loader, and species filtering.
///
/// Architecture:
/// ```text
///  assets/iris.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode rows, species codes → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Sample>, per-species counts
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  selected species → visible indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
