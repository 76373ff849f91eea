/// Centered moving-average filter.
///
/// For index `i` the window spans `[i - w/2, i + (w+1)/2)`, clamped to the
/// sequence bounds, so the window shrinks near the edges instead of padding
/// or wrapping. The output has the same length as the input.
///
/// A window of 1 or less is a no-op.
pub fn moving_average(data: &[f64], window_size: usize) -> Vec<f64> {
    if window_size <= 1 {
        return data.to_vec();
    }

    let n = data.len();
    let mut result = Vec::with_capacity(n);
    for i in 0..n {
        let start = i.saturating_sub(window_size / 2);
        let end = (i + window_size.div_ceil(2)).min(n);
        let sum: f64 = data[start..end].iter().sum();
        result.push(sum / (end - start) as f64);
    }
    result
}
