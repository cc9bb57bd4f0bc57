use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

/// One synthetic daily reading.
#[derive(Debug, Serialize)]
struct Reading {
    date: String,
    region: &'static str,
    temperature: f64,
    humidity: f64,
    sales: i64,
}

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
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Day offset from 2024-01-01 → ISO date (2024 is a leap year).
fn iso_date(day_of_year: usize) -> String {
    const MONTH_DAYS: [usize; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut remaining = day_of_year;
    for (month, &len) in MONTH_DAYS.iter().enumerate() {
        if remaining < len {
            return format!("2024-{:02}-{:02}", month + 1, remaining + 1);
        }
        remaining -= len;
    }
    "2024-12-31".to_string()
}

fn generate(days: usize, rng: &mut SimpleRng) -> Vec<Reading> {
    let regions = [("North", -4.0, 120.0), ("South", 6.0, 180.0)];

    let mut readings = Vec::with_capacity(days * regions.len());
    for day in 0..days {
        // One seasonal cycle over the year.
        let season = (day as f64 / 365.0 * 2.0 * std::f64::consts::PI).sin();
        for &(region, temp_offset, base_sales) in &regions {
            let temperature = 12.0 + temp_offset + 10.0 * season + rng.gauss(0.0, 1.5);
            let humidity = (65.0 - 15.0 * season + rng.gauss(0.0, 4.0)).clamp(0.0, 100.0);
            let sales = (base_sales + 4.0 * temperature + rng.gauss(0.0, 12.0)).max(0.0);
            readings.push(Reading {
                date: iso_date(day),
                region,
                temperature: round1(temperature),
                humidity: round1(humidity),
                sales: sales.round() as i64,
            });
        }
    }
    readings
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let readings = generate(90, &mut rng);

    let csv_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating CSV output")?;
    for reading in &readings {
        writer.serialize(reading).context("writing CSV record")?;
    }
    writer.flush().context("flushing CSV output")?;

    let json_path = "sample_data.json";
    let file = File::create(json_path).context("creating JSON output")?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, &readings).context("writing JSON")?;
    out.flush().context("flushing JSON output")?;

    println!(
        "Wrote {} readings to {csv_path} and {json_path}",
        readings.len()
    );
    Ok(())
}
