/// Data layer: core types, loading, labelling, filtering and validation.
///
/// Architecture:
/// ```text
///  data/penguins.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → PenguinTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PenguinTable  │  Vec<PenguinRecord>, shared as Arc
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐        ┌──────────┐
///   │  filter   │ ────▶ │ validate  │  is the subset drawable?
///   └──────────┘        └──────────┘
///        ▲
///        │ attribute label → column
///   ┌──────────┐
///   │  labels   │
///   └──────────┘
/// ```

pub mod filter;
pub mod labels;
pub mod loader;
pub mod model;
pub mod validate;
