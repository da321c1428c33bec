/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  volcanoes.txt          world.json
///        │                     │
///        ▼                     ▼
///   ┌──────────┐         ┌──────────┐
///   │  loader   │  CSV →  │  loader   │  GeoJSON →
///   └──────────┘         └──────────┘
///        │                     │
///        ▼                     ▼
///  Vec<VolcanoRecord>    BoundaryDocument
/// ```
pub mod loader;
pub mod model;
