/// Analysis layer: pure numeric transforms over dataset channels.
///
/// ```text
///   Dataset
///      │ derive      magnitudes + sample rate
///      ▼
///   channel (Vec<f64>)
///      │
///      ├─ smooth ──► moving average ──► peaks ──► segmentation
///      │
///      ├─ spectrum ─► zero-pad to 2^k ─► FFT ─► frequency bins
///      │
///      └─ stats ───► per-channel summary
/// ```
///
/// Every function here is a pure function of its inputs; nothing caches
/// across calls.

pub mod derive;
pub mod peaks;
pub mod smooth;
pub mod spectrum;
pub mod stats;
