//! Sample-input generation for the demo.
//!
//! Produces data whose sections stress the codec differently: a dominant
//! byte yields deep skewed trees, text-like sections give a mid-size
//! alphabet, runs compress almost entirely away, and uniform random bytes
//! barely compress at all. The mix makes the stats summary worth reading.
//!
//! All randomness is seeded ChaCha8: the same seed always generates the
//! same sample.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use std::path::Path;

/// Section flavors, picked per 4 KiB block.
enum Section {
    /// One dominant byte with occasional others (deep skewed tree)
    Skewed,
    /// Lowercase text alphabet, roughly word-shaped
    Text,
    /// A single repeated byte
    Run,
    /// Uniform random bytes (near-incompressible)
    Noise,
}

impl Section {
    fn pick(rng: &mut ChaCha8Rng) -> Self {
        match rng.gen_range(0..10) {
            0..=2 => Section::Skewed,
            3..=5 => Section::Text,
            6..=7 => Section::Run,
            _ => Section::Noise,
        }
    }
}

/// Generate `size_bytes` of sample data for `seed`.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let block = (size_bytes - data.len()).min(4096);
        match Section::pick(&mut rng) {
            Section::Skewed => {
                let dominant: u8 = rng.gen();
                for _ in 0..block {
                    if rng.gen_bool(0.95) {
                        data.push(dominant);
                    } else {
                        data.push(rng.gen());
                    }
                }
            }
            Section::Text => {
                let alphabet = b"etaoin shrdlu.\n";
                for _ in 0..block {
                    data.push(alphabet[rng.gen_range(0..alphabet.len())]);
                }
            }
            Section::Run => {
                let byte: u8 = rng.gen();
                data.extend(std::iter::repeat(byte).take(block));
            }
            Section::Noise => {
                for _ in 0..block {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size_bytes);
    data
}

/// Write a generated sample to `path`.
pub fn write_sample_file(path: &Path, seed: u64, size_bytes: usize) -> std::io::Result<()> {
    let data = generate_sample_data(seed, size_bytes);
    let mut file = std::fs::File::create(path)?;
    file.write_all(&data)
}
