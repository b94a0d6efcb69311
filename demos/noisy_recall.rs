//! Noisy Recall
//!
//! Stores three 5x5 glyphs, corrupts one of them, and lets the network
//! relax back to the stored version.
//!
//! Run with `RUST_LOG=hopfield=trace` to see per-sweep flip counts.

use hopfield::{Hopfield, Pattern, RecallConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const SIDE: usize = 5;

const GLYPHS: [(&str, [u8; SIDE * SIDE]); 3] = [
    (
        "T",
        [
            1, 1, 1, 1, 1, //
            0, 0, 1, 0, 0, //
            0, 0, 1, 0, 0, //
            0, 0, 1, 0, 0, //
            0, 0, 1, 0, 0, //
        ],
    ),
    (
        "L",
        [
            1, 0, 0, 0, 0, //
            1, 0, 0, 0, 0, //
            1, 0, 0, 0, 0, //
            1, 0, 0, 0, 0, //
            1, 1, 1, 1, 1, //
        ],
    ),
    (
        "X",
        [
            1, 0, 0, 0, 1, //
            0, 1, 0, 1, 0, //
            0, 0, 1, 0, 0, //
            0, 1, 0, 1, 0, //
            1, 0, 0, 0, 1, //
        ],
    ),
];

fn render(pattern: &Pattern) -> String {
    pattern
        .data()
        .chunks(SIDE)
        .map(|row| {
            row.iter()
                .map(|&v| if v > 0 { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> hopfield::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(50));
    println!("Hopfield: Noisy Glyph Recall");
    println!("{}", "=".repeat(50));

    let config = RecallConfig::default()
        .with_steps(10)
        .with_seed(42)
        .stop_when_stable(true);
    let mut net = Hopfield::with_config(config)?;

    let stored: Vec<Pattern> = GLYPHS
        .iter()
        .map(|(_, bits)| net.to_bipolar(bits))
        .collect::<hopfield::Result<_>>()?;
    let weights = net.train(&stored)?;
    println!("\nStored {} glyphs in {} neurons", stored.len(), weights.dimensions());

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for ((name, _), original) in GLYPHS.iter().zip(&stored) {
        let noisy = original.with_noise(3, &mut rng)?;
        let outcome = net.recall_detailed(&weights, &noisy)?;
        let distance = outcome.state.hamming_distance(original)?;

        println!("\n--- {} ---", name);
        println!("Probe (3 flips):\n{}", render(&noisy));
        println!("Recalled:\n{}", render(&outcome.state));
        println!(
            "sweeps={} flips={} settled={} distance_to_stored={}",
            outcome.sweeps, outcome.flips, outcome.settled, distance
        );
    }

    Ok(())
}
