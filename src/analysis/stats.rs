/// Summary statistics for one channel.
///
/// NaN cells (missing or non-numeric source fields) are excluded;
/// `count` is the number of finite samples that went into the figures.
#[derive(Debug, Clone, Default)]
pub struct ChannelStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub rms: f64,
}

impl ChannelStats {
    /// Compute statistics over a numeric sequence.
    pub fn compute(data: &[f64]) -> Self {
        let finite: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Self::default();
        }

        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let variance =
            finite.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / count as f64;
        let mean_square = finite.iter().map(|v| v * v).sum::<f64>() / count as f64;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &finite {
            min = min.min(v);
            max = max.max(v);
        }

        ChannelStats {
            count,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            rms: mean_square.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_basic_figures() {
        let stats = ChannelStats::compute(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert!((stats.std_dev - 1.25f64.sqrt()).abs() < 1e-12);
        assert!((stats.rms - 7.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn skips_nan_cells() {
        let stats = ChannelStats::compute(&[2.0, f64::NAN, 4.0]);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 3.0);
    }

    #[test]
    fn empty_or_all_nan_is_zeroed() {
        let stats = ChannelStats::compute(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        let stats = ChannelStats::compute(&[f64::NAN, f64::NAN]);
        assert_eq!(stats.count, 0);
    }
}
