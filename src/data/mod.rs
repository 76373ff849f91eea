/// Data layer: cell/record/dataset types and CSV ingestion.
///
/// Architecture:
/// ```text
///   raw CSV text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse text → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, header columns, channel extraction
///   └──────────┘
/// ```
///
/// Everything downstream (magnitude derivation, smoothing, peaks, spectrum)
/// reads the `Dataset` without mutating it.

pub mod loader;
pub mod model;
