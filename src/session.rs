use log::info;

use crate::analysis::derive::{derive_magnitudes, estimate_sample_rate};
use crate::analysis::peaks::find_peaks;
use crate::analysis::smooth::moving_average;
use crate::analysis::spectrum::{spectrum, Spectrum};
use crate::analysis::stats::ChannelStats;
use crate::data::loader::parse_csv;
use crate::data::model::Dataset;
use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Configuration passed explicitly into each analysis call
// ---------------------------------------------------------------------------

/// Parameters for peak-based segmentation. The smoothing window is the same
/// one used for the smoothed-channel view; threshold and distance go
/// straight to the peak detector.
#[derive(Debug, Clone, Copy)]
pub struct SegmentationConfig {
    /// Moving-average window applied before peak detection.
    pub window_size: usize,
    /// Minimum value for a sample to count as a peak.
    pub threshold: f64,
    /// Minimum spacing between accepted peaks, in samples.
    pub distance: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        SegmentationConfig {
            window_size: 5,
            threshold: 1.0,
            distance: 10,
        }
    }
}

/// Result of peak-based segmentation on one channel: the smoothed signal
/// the detector ran on, and the indices it accepted. Renderers pair the
/// indices with timestamps to mark detected events.
#[derive(Debug, Clone)]
pub struct Segmentation {
    pub smoothed: Vec<f64>,
    pub peaks: Vec<usize>,
}

// ---------------------------------------------------------------------------
// Session – one ingest-then-analyze context
// ---------------------------------------------------------------------------

/// One analysis session over a single ingested recording.
///
/// Construction is the atomic ingest step: parse, derive magnitudes,
/// estimate the sample rate. A failed ingest returns an error and builds
/// nothing, so the caller's previous session (if any) stays usable.
///
/// All analyses recompute from the dataset on every call; changing a
/// parameter means calling again. Nothing is cached.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Dataset,
    sample_rate: f64,
}

impl Session {
    /// Ingest CSV text: parse it, derive the magnitude channels, and
    /// estimate the sample rate from the timestamps.
    pub fn from_csv(text: &str) -> Result<Session, AnalysisError> {
        let mut dataset = parse_csv(text)?;
        derive_magnitudes(&mut dataset);
        let sample_rate = estimate_sample_rate(&dataset);
        info!(
            "ingested {} records, estimated sample rate {:.2} Hz",
            dataset.len(),
            sample_rate
        );
        Ok(Session {
            dataset,
            sample_rate,
        })
    }

    /// The ingested dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Estimated sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    fn channel(&self, name: &str) -> Result<Vec<f64>, AnalysisError> {
        self.dataset
            .channel(name)
            .ok_or_else(|| AnalysisError::UnknownChannel(name.to_string()))
    }

    /// A named channel passed through the moving-average smoother.
    pub fn smoothed_channel(
        &self,
        name: &str,
        window_size: usize,
    ) -> Result<Vec<f64>, AnalysisError> {
        Ok(moving_average(&self.channel(name)?, window_size))
    }

    /// Smooth a channel and detect peaks on the smoothed signal.
    pub fn segmentation(
        &self,
        name: &str,
        config: &SegmentationConfig,
    ) -> Result<Segmentation, AnalysisError> {
        let smoothed = self.smoothed_channel(name, config.window_size)?;
        let peaks = find_peaks(&smoothed, config.threshold, config.distance);
        Ok(Segmentation { smoothed, peaks })
    }

    /// Frequency spectrum of a channel at full resolution (no smoothing),
    /// using the session's sample rate.
    pub fn spectrum(&self, name: &str) -> Result<Spectrum, AnalysisError> {
        spectrum(&self.channel(name)?, self.sample_rate)
    }

    /// Summary statistics for a channel.
    pub fn channel_stats(&self, name: &str) -> Result<ChannelStats, AnalysisError> {
        Ok(ChannelStats::compute(&self.channel(name)?))
    }
}
