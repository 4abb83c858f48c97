//! Writes a synthetic penguins CSV with the dashboard's schema, for testing
//! the app against a larger dataset than the embedded one.

/// Per-species measurement distributions: (mean, std dev) for bill length,
/// bill depth, and body mass.
struct SpeciesProfile {
    name: &'static str,
    islands: &'static [&'static str],
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    body_mass: (f64, f64),
    count: usize,
}

const PROFILES: [SpeciesProfile; 3] = [
    SpeciesProfile {
        name: "Adelie",
        islands: &["Torgersen", "Biscoe", "Dream"],
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        body_mass: (3700.0, 460.0),
        count: 152,
    },
    SpeciesProfile {
        name: "Gentoo",
        islands: &["Biscoe"],
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        body_mass: (5076.0, 504.0),
        count: 124,
    },
    SpeciesProfile {
        name: "Chinstrap",
        islands: &["Dream"],
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        body_mass: (3733.0, 384.0),
        count: 68,
    },
];

/// Roughly one row in fifty loses its body mass, mirroring the gaps in the
/// real data.
const MISSING_RATE: f64 = 0.02;

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

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "penguins_generated.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "species",
        "island",
        "bill_length_mm",
        "bill_depth_mm",
        "body_mass_g",
    ])?;

    let mut rows = 0usize;
    for profile in &PROFILES {
        for _ in 0..profile.count {
            let island = profile.islands
                [(rng.next_u64() % profile.islands.len() as u64) as usize];
            let length = rng.gauss(profile.bill_length.0, profile.bill_length.1);
            let depth = rng.gauss(profile.bill_depth.0, profile.bill_depth.1);

            let mass = if rng.next_f64() < MISSING_RATE {
                String::new()
            } else {
                // Masses are recorded to 25 g in the field data.
                let m = rng.gauss(profile.body_mass.0, profile.body_mass.1);
                format!("{:.0}", (m / 25.0).round() * 25.0)
            };

            writer.write_record([
                profile.name,
                island,
                &format!("{length:.1}"),
                &format!("{depth:.1}"),
                &mass,
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {rows} penguins to {output_path}");
    Ok(())
}
