use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Spectrum – the frequency-domain view of one channel
// ---------------------------------------------------------------------------

/// Discrete frequency-spectrum of a real signal.
///
/// `frequencies` and `magnitudes` are parallel and `padded_len / 2` long:
/// the first half of the transform, since the mirror half of a real input
/// carries no extra information.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Frequency of each bin in Hz, ascending from 0 in steps of
    /// `sample_rate / padded_len`.
    pub frequencies: Vec<f64>,
    /// Non-negative magnitude of each bin.
    pub magnitudes: Vec<f64>,
    /// Power-of-two length the signal was zero-padded to.
    pub padded_len: usize,
    /// Sample rate the bin frequencies were derived from.
    pub sample_rate: f64,
}

impl Spectrum {
    /// Frequency resolution in Hz (bin spacing).
    pub fn bin_hz(&self) -> f64 {
        self.sample_rate / self.padded_len as f64
    }

    /// Frequency of the strongest bin.
    pub fn peak_frequency(&self) -> f64 {
        let mut max_idx = 0;
        let mut max_mag = f64::NEG_INFINITY;
        for (i, &m) in self.magnitudes.iter().enumerate() {
            if m > max_mag {
                max_mag = m;
                max_idx = i;
            }
        }
        self.frequencies[max_idx]
    }
}

/// Transform length for a signal of `len` samples:
/// `2^(floor(log2(len - 1)) + 1)`.
///
/// This is the formula the original analyzer uses. It equals the minimal
/// power of two ≥ `len` for every length except `len = 2^k + 1`, where it
/// stops at `2^(k+1)` exactly; kept as-is so spectra stay bin-compatible
/// with existing output. Requires `len >= 2`.
pub fn padded_length(len: usize) -> usize {
    1 << ((len - 1).ilog2() + 1)
}

/// Compute the discrete frequency spectrum of a real signal.
///
/// The signal is zero-padded on the right to [`padded_length`], transformed
/// with a forward FFT, and reduced to per-bin magnitudes
/// `sqrt(re² + im²)` over the first `padded_len / 2` bins, with bin `k`
/// mapped to `k * sample_rate / padded_len` Hz.
///
/// Pure function of `(signal, sample_rate)`; signals shorter than 2 samples
/// are rejected with [`AnalysisError::DegenerateSignal`].
pub fn spectrum(signal: &[f64], sample_rate: f64) -> Result<Spectrum, AnalysisError> {
    if signal.len() < 2 {
        return Err(AnalysisError::DegenerateSignal(signal.len()));
    }

    let padded_len = padded_length(signal.len());
    let mut buffer: Vec<Complex64> = signal
        .iter()
        .map(|&v| Complex64::new(v, 0.0))
        .collect();
    buffer.resize(padded_len, Complex64::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(padded_len);
    fft.process(&mut buffer);

    let half = padded_len / 2;
    let magnitudes: Vec<f64> = buffer[..half].iter().map(|c| c.norm()).collect();
    let frequencies: Vec<f64> = (0..half)
        .map(|k| k as f64 * sample_rate / padded_len as f64)
        .collect();

    Ok(Spectrum {
        frequencies,
        magnitudes,
        padded_len,
        sample_rate,
    })
}
