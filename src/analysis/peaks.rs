use std::cmp::Ordering;

/// Find well-separated local maxima above a threshold.
///
/// Non-maximum suppression over the whole index range:
/// 1. Candidates are strict interior local maxima above `threshold`
///    (plateaus never qualify).
/// 2. Candidates are visited by value, highest first; ties keep their
///    discovery order (ascending index — the sort is stable).
/// 3. Accepting a candidate suppresses every position in
///    `[i - distance, i + distance)`, candidates or not, clamped to the
///    sequence bounds. `distance = 0` suppresses nothing.
/// 4. Accepted indices are returned in ascending order.
///
/// Total over its domain: an empty or featureless input yields an empty
/// result, never an error. `threshold` may be negative.
pub fn find_peaks(data: &[f64], threshold: f64, distance: usize) -> Vec<usize> {
    let n = data.len();
    if n < 3 {
        return Vec::new();
    }

    let mut candidates: Vec<(usize, f64)> = Vec::new();
    for i in 1..n - 1 {
        let v = data[i];
        if v > threshold && v > data[i - 1] && v > data[i + 1] {
            candidates.push((i, v));
        }
    }
    if candidates.is_empty() {
        return Vec::new();
    }

    // Highest value first; stable, so equal values stay in discovery order.
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut accepted = Vec::new();
    let mut suppressed = vec![false; n];
    for (idx, _) in candidates {
        if suppressed[idx] {
            continue;
        }
        accepted.push(idx);
        let start = idx.saturating_sub(distance);
        let end = (idx + distance).min(n);
        for s in &mut suppressed[start..end] {
            *s = true;
        }
    }

    accepted.sort_unstable();
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_separated_equal_peaks() {
        let data = [0.0, 5.0, 0.0, 5.0, 0.0, 5.0, 0.0];
        assert_eq!(find_peaks(&data, 1.0, 1), vec![1, 3, 5]);
    }

    #[test]
    fn suppression_radius_thins_equal_peaks() {
        let data = [0.0, 5.0, 0.0, 5.0, 0.0, 5.0, 0.0];
        // Index 1 wins the tie (discovery order) and suppresses [0, 4);
        // index 5 sits outside the radius and survives.
        assert_eq!(find_peaks(&data, 1.0, 3), vec![1, 5]);
        // A radius covering the whole sequence leaves only the first.
        assert_eq!(find_peaks(&data, 1.0, 5), vec![1]);
    }

    #[test]
    fn threshold_excludes_low_maxima() {
        let data = [0.0, 2.0, 0.0, 9.0, 0.0];
        assert_eq!(find_peaks(&data, 3.0, 1), vec![3]);
        assert_eq!(find_peaks(&data, 9.0, 1), Vec::<usize>::new());
    }

    #[test]
    fn negative_threshold_is_allowed() {
        let data = [-5.0, -1.0, -5.0];
        assert_eq!(find_peaks(&data, -2.0, 1), vec![1]);
    }

    #[test]
    fn plateaus_do_not_qualify() {
        let data = [0.0, 3.0, 3.0, 0.0];
        assert_eq!(find_peaks(&data, 1.0, 1), Vec::<usize>::new());
    }

    #[test]
    fn endpoints_are_never_peaks() {
        let data = [9.0, 1.0, 9.0];
        assert_eq!(find_peaks(&data, 0.0, 1), Vec::<usize>::new());
    }

    #[test]
    fn zero_distance_accepts_every_candidate() {
        let data = [0.0, 2.0, 0.0, 3.0, 0.0];
        assert_eq!(find_peaks(&data, 0.0, 0), vec![1, 3]);
    }

    #[test]
    fn lower_peak_survives_outside_radius() {
        let data = [0.0, 1.0, 0.0, 9.0, 0.0, 1.0, 0.0];
        // 9 wins first and suppresses [1, 5); index 5 sits just outside.
        assert_eq!(find_peaks(&data, 0.5, 2), vec![3, 5]);
    }

    #[test]
    fn results_respect_minimum_spacing() {
        let data: Vec<f64> = (0..200)
            .map(|i| (i as f64 * 0.37).sin() + (i as f64 * 0.11).cos())
            .collect();
        for distance in [2usize, 5, 11] {
            let peaks = find_peaks(&data, 0.0, distance);
            for pair in peaks.windows(2) {
                assert!(pair[1] - pair[0] >= distance);
            }
        }
    }

    #[test]
    fn short_inputs_yield_nothing() {
        assert!(find_peaks(&[], 0.0, 1).is_empty());
        assert!(find_peaks(&[1.0, 2.0], 0.0, 1).is_empty());
    }
}
