use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::info;

use imu_signal_analyzer::data::model::{ACC_MAGNITUDE, GYRO_MAGNITUDE};
use imu_signal_analyzer::{SegmentationConfig, Session};

/// Command-line shim around the analysis core: reads the file (the one
/// piece of I/O the core never does), runs the analyses, prints a report.
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path: PathBuf = match args.next() {
        Some(p) => p.into(),
        None => bail!("usage: imu-signal-analyzer <recording.csv> [channel]"),
    };
    let channel = args.next().unwrap_or_else(|| ACC_MAGNITUDE.to_string());

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    info!("loaded {} bytes from {}", text.len(), path.display());

    let session = Session::from_csv(&text).context("ingesting recording")?;
    let dataset = session.dataset();

    println!("Recording: {}", path.display());
    println!("  records:     {}", dataset.len());
    println!("  sample rate: {:.2} Hz", session.sample_rate());

    println!("\nChannel statistics");
    println!(
        "{:>14}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10}",
        "channel", "count", "mean", "std", "min", "max"
    );
    for name in [
        "AccX",
        "AccY",
        "AccZ",
        "GyroX",
        "GyroY",
        "GyroZ",
        ACC_MAGNITUDE,
        GYRO_MAGNITUDE,
    ] {
        if !dataset.has_channel(name) {
            continue;
        }
        let stats = session.channel_stats(name)?;
        println!(
            "{:>14}  {:>8}  {:>10.4}  {:>10.4}  {:>10.4}  {:>10.4}",
            name, stats.count, stats.mean, stats.std_dev, stats.min, stats.max
        );
    }

    if dataset.is_empty() {
        println!("\nNo samples; skipping segmentation and spectrum.");
        return Ok(());
    }

    let config = SegmentationConfig::default();
    let segmentation = session
        .segmentation(&channel, &config)
        .with_context(|| format!("segmenting channel {channel}"))?;
    println!(
        "\nSegmentation on {channel} (window {}, threshold {}, distance {})",
        config.window_size, config.threshold, config.distance
    );
    println!("  peaks: {}", segmentation.peaks.len());
    if !segmentation.peaks.is_empty() {
        let timestamps = dataset.timestamps();
        println!("{:>8}  {:>14}  {:>10}", "index", "timestamp (us)", "value");
        for &i in &segmentation.peaks {
            println!(
                "{:>8}  {:>14}  {:>10.4}",
                i, timestamps[i], segmentation.smoothed[i]
            );
        }
    }

    if dataset.len() >= 2 {
        let spectrum = session
            .spectrum(&channel)
            .with_context(|| format!("computing spectrum of {channel}"))?;
        println!(
            "\nSpectrum of {channel} ({} bins, {:.4} Hz resolution)",
            spectrum.magnitudes.len(),
            spectrum.bin_hz()
        );
        println!("  dominant frequency: {:.3} Hz", spectrum.peak_frequency());
    }

    Ok(())
}
