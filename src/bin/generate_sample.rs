//! Regenerate a synthetic launch table with the same shape as the shipped
//! `data/spacex_launch_dash.csv`. Deterministic: same seed, same file.

use anyhow::{Context, Result};

const OUTPUT_PATH: &str = "data/spacex_launch_dash.csv";
const FLIGHTS: u32 = 56;

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

    /// Pick an index according to the given weights.
    fn weighted(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut roll = self.next_f64() * total;
        for (i, w) in weights.iter().enumerate() {
            if roll < *w {
                return i;
            }
            roll -= w;
        }
        weights.len() - 1
    }
}

/// Booster era for a flight number: category, typical payload (mean, sigma),
/// and landing success probability.
fn era(flight: u32) -> (&'static str, f64, f64, f64) {
    match flight {
        1..=5 => ("v1.0", 400.0, 300.0, 0.0),
        6..=19 => ("v1.1", 2800.0, 1400.0, 0.05),
        20..=41 => ("FT", 4300.0, 2400.0, 0.60),
        42..=55 => ("B4", 4200.0, 2200.0, 0.55),
        _ => ("B5", 4500.0, 1500.0, 0.90),
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let sites = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
    // CCAFS LC-40 dominates the early manifest; KSC and SLC-40 only join in
    // the FT/B4 eras, matching the shipped table's site mix.
    let early_weights = [0.92, 0.0, 0.0, 0.08];
    let late_weights = [0.30, 0.15, 0.35, 0.20];

    let mut wtr = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    wtr.write_record([
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;

    for flight in 1..=FLIGHTS {
        let (category, mass_mean, mass_sigma, success_p) = era(flight);

        let weights = if flight < 20 {
            &early_weights
        } else {
            &late_weights
        };
        let site = sites[rng.weighted(weights)];

        let payload_mass = rng.gauss(mass_mean, mass_sigma).max(0.0);
        let class = if rng.next_f64() < success_p { 1 } else { 0 };
        let booster_version = format!("F9 {category} B1{:03}", flight + 2);

        wtr.write_record([
            flight.to_string(),
            site.to_string(),
            class.to_string(),
            format!("{payload_mass:.1}"),
            booster_version,
            category.to_string(),
        ])?;
    }

    wtr.flush().context("writing sample data")?;
    println!("Wrote {FLIGHTS} launch records to {OUTPUT_PATH}");
    Ok(())
}
