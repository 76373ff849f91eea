use log::warn;

use crate::data::model::{
    Dataset, ACC_COLUMNS, ACC_MAGNITUDE, GYRO_COLUMNS, GYRO_MAGNITUDE,
};

/// Sample rate used when it cannot be estimated from the data.
pub const FALLBACK_SAMPLE_RATE: f64 = 100.0;

/// Compute the Euclidean norm of a 3-axis reading. Missing or non-numeric
/// axes contribute NaN, so the magnitude of a broken row is NaN rather than
/// a silently wrong number.
fn axis_magnitude(record: &crate::data::model::Record, axes: &[&str; 3]) -> f64 {
    let [x, y, z] = axes.map(|a| record.number(a).unwrap_or(f64::NAN));
    (x * x + y * y + z * z).sqrt()
}

/// Insert the derived `AccMagnitude` / `GyroMagnitude` columns on every
/// record. Must run once per ingest, before any analysis that references a
/// magnitude channel.
pub fn derive_magnitudes(dataset: &mut Dataset) {
    for record in &mut dataset.records {
        let acc = axis_magnitude(record, &ACC_COLUMNS);
        let gyro = axis_magnitude(record, &GYRO_COLUMNS);
        record.insert_number(ACC_MAGNITUDE, acc);
        record.insert_number(GYRO_MAGNITUDE, gyro);
    }
    dataset.add_column(ACC_MAGNITUDE);
    dataset.add_column(GYRO_MAGNITUDE);
}

/// Estimate the sampling rate in Hz from the first and last timestamps:
/// `(n - 1) / elapsed_seconds` with timestamps in microseconds.
///
/// Falls back to [`FALLBACK_SAMPLE_RATE`] when there are fewer than two
/// records, the elapsed time is zero, or the timestamps are not numeric.
pub fn estimate_sample_rate(dataset: &Dataset) -> f64 {
    let n = dataset.len();
    if n < 2 {
        return FALLBACK_SAMPLE_RATE;
    }

    let timestamps = dataset.timestamps();
    let elapsed_s = (timestamps[n - 1] - timestamps[0]) / 1e6;
    if elapsed_s == 0.0 {
        warn!("zero elapsed time, using default sample rate");
        return FALLBACK_SAMPLE_RATE;
    }
    if !elapsed_s.is_finite() {
        warn!("non-numeric timestamps, using default sample rate");
        return FALLBACK_SAMPLE_RATE;
    }

    (n - 1) as f64 / elapsed_s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    fn two_samples(ts0: &str, ts1: &str) -> Dataset {
        parse_csv(&format!(
            "Timestamp_us,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n\
             {ts0},3,4,0,1,2,2\n\
             {ts1},0,0,0,0,0,0\n"
        ))
        .unwrap()
    }

    #[test]
    fn magnitudes_are_euclidean_norms() {
        let mut ds = two_samples("0", "1000000");
        derive_magnitudes(&mut ds);
        assert_eq!(ds.records[0].number(ACC_MAGNITUDE), Some(5.0));
        assert_eq!(ds.records[0].number(GYRO_MAGNITUDE), Some(3.0));
        assert_eq!(ds.records[1].number(ACC_MAGNITUDE), Some(0.0));
        assert!(ds.has_channel(ACC_MAGNITUDE));
        assert!(ds.has_channel(GYRO_MAGNITUDE));
    }

    #[test]
    fn magnitude_of_broken_axes_is_nan() {
        let mut ds = parse_csv(
            "Timestamp_us,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n0,1,bad,0,0,0,0\n",
        )
        .unwrap();
        derive_magnitudes(&mut ds);
        assert!(ds.records[0].number(ACC_MAGNITUDE).unwrap().is_nan());
        assert_eq!(ds.records[0].number(GYRO_MAGNITUDE), Some(0.0));
    }

    #[test]
    fn one_second_apart_is_one_hertz() {
        let ds = two_samples("0", "1000000");
        assert_eq!(estimate_sample_rate(&ds), 1.0);
    }

    #[test]
    fn fewer_than_two_records_falls_back() {
        let ds = parse_csv("Timestamp_us,AccX\n").unwrap();
        assert_eq!(estimate_sample_rate(&ds), FALLBACK_SAMPLE_RATE);
        let ds = parse_csv("Timestamp_us,AccX\n0,1\n").unwrap();
        assert_eq!(estimate_sample_rate(&ds), FALLBACK_SAMPLE_RATE);
    }

    #[test]
    fn zero_elapsed_time_falls_back() {
        let ds = two_samples("5000", "5000");
        assert_eq!(estimate_sample_rate(&ds), FALLBACK_SAMPLE_RATE);
    }

    #[test]
    fn non_numeric_timestamps_fall_back() {
        let ds = two_samples("start", "end");
        assert_eq!(estimate_sample_rate(&ds), FALLBACK_SAMPLE_RATE);
    }
}
