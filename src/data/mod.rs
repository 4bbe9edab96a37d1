/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → AccessDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ AccessDataset │  Vec<Record>, distinct entities / years
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  entity / year predicates, per-entity mean
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
