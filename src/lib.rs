//! Analysis core for IMU recordings.
//!
//! Ingests a CSV of accelerometer/gyroscope samples and derives the signals
//! a renderer plots: per-sample vector magnitudes, an estimated sample
//! rate, moving-average smoothed channels, peak-based segmentation (step
//! detection), and a discrete frequency spectrum.
//!
//! The core never touches files or a UI: it takes already-decoded text and
//! hands back plain numeric arrays. [`Session`] is the entry point — one
//! session per ingested recording, every analysis recomputed on demand.

pub mod analysis;
pub mod data;
pub mod error;
pub mod session;

pub use analysis::spectrum::Spectrum;
pub use analysis::stats::ChannelStats;
pub use data::model::{Dataset, FieldValue, Record};
pub use error::AnalysisError;
pub use session::{Segmentation, SegmentationConfig, Session};
