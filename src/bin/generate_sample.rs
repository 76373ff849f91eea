use std::f64::consts::PI;
use std::fmt::Write as _;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// One synthesized IMU sample.
struct Sample {
    timestamp_us: u64,
    acc: [f64; 3],
    gyro: [f64; 3],
}

/// Synthesize a walking recording: gravity on Z plus a sinusoidal step
/// component, a weaker arm-swing on X, and Gaussian sensor noise.
fn generate_walk(
    duration_s: f64,
    sample_rate: f64,
    step_hz: f64,
    rng: &mut SimpleRng,
) -> Vec<Sample> {
    let count = (duration_s * sample_rate) as usize + 1;
    (0..count)
        .map(|i| {
            let t = i as f64 / sample_rate;
            let step = (2.0 * PI * step_hz * t).sin();
            let sway = (2.0 * PI * step_hz / 2.0 * t).sin();
            Sample {
                timestamp_us: (t * 1e6) as u64,
                acc: [
                    1.2 * sway + rng.gauss(0.0, 0.15),
                    rng.gauss(0.0, 0.15),
                    9.81 + 3.5 * step + rng.gauss(0.0, 0.2),
                ],
                gyro: [
                    rng.gauss(0.0, 0.02),
                    0.6 * step + rng.gauss(0.0, 0.03),
                    0.3 * sway + rng.gauss(0.0, 0.02),
                ],
            }
        })
        .collect()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // 20 s of walking at 100 Hz with a 1.8 Hz step cadence.
    let sample_rate = 100.0;
    let samples = generate_walk(20.0, sample_rate, 1.8, &mut rng);

    let mut csv = String::from("Timestamp_us,AccX,AccY,AccZ,GyroX,GyroY,GyroZ\n");
    for s in &samples {
        writeln!(
            csv,
            "{},{:.5},{:.5},{:.5},{:.5},{:.5},{:.5}",
            s.timestamp_us, s.acc[0], s.acc[1], s.acc[2], s.gyro[0], s.gyro[1], s.gyro[2]
        )
        .expect("writing to String cannot fail");
    }

    let output_path = "sample_walk.csv";
    std::fs::write(output_path, &csv).expect("Failed to write output file");

    println!(
        "Wrote {} samples at {} Hz to {output_path}",
        samples.len(),
        sample_rate
    );
}
