/*!
Random byte generation.

The source is process-wide and switchable. It only feeds this module; key
generation entropy belongs to the provider.
*/

use std::fmt;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng, rng};

use crate::core::error::{Error, Result};

/// Which generator [`randombytes`] draws from
#[derive(Clone, Copy)]
pub enum RandomAlgorithm {
    /// Thread-local CSPRNG seeded from the operating system
    System,
    /// Deterministic generator from a 32-byte seed, for reproducible vectors
    Seeded([u8; 32]),
    /// Caller-supplied generator that fills the buffer it is given
    Custom(fn(&mut [u8])),
}

impl fmt::Debug for RandomAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomAlgorithm::System => write!(f, "System"),
            RandomAlgorithm::Seeded(_) => write!(f, "Seeded(..)"),
            RandomAlgorithm::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

enum Source {
    System,
    Seeded(StdRng),
    Custom(fn(&mut [u8])),
}

impl Source {
    fn fill(&mut self, dest: &mut [u8]) {
        match self {
            Source::System => rng().fill_bytes(dest),
            Source::Seeded(seeded) => seeded.fill_bytes(dest),
            Source::Custom(custom) => custom(dest),
        }
    }
}

static SOURCE: Lazy<RwLock<Source>> = Lazy::new(|| RwLock::new(Source::System));

fn with_source<T>(f: impl FnOnce(&mut Source) -> T) -> T {
    // A poisoned lock only means another thread panicked mid-fill.
    let mut source = SOURCE.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut source)
}

/// Switch the generator used by [`randombytes`] and [`randombytes_into`]
pub fn switch_algorithm(algorithm: RandomAlgorithm) {
    log::debug!("switching random source to {:?}", algorithm);
    with_source(|source| {
        *source = match algorithm {
            RandomAlgorithm::System => Source::System,
            RandomAlgorithm::Seeded(seed) => Source::Seeded(StdRng::from_seed(seed)),
            RandomAlgorithm::Custom(custom) => Source::Custom(custom),
        }
    });
}

/// Generate `bytes_to_read` random bytes
pub fn randombytes(bytes_to_read: usize) -> Vec<u8> {
    let mut result = vec![0u8; bytes_to_read];
    with_source(|source| source.fill(&mut result));
    result
}

/// Fill the first `bytes_to_read` bytes of `random_array`
pub fn randombytes_into(random_array: &mut [u8], bytes_to_read: usize) -> Result<()> {
    if bytes_to_read > random_array.len() {
        return Err(Error::OutOfRange {
            requested: bytes_to_read,
            available: random_array.len(),
        });
    }
    with_source(|source| source.fill(&mut random_array[..bytes_to_read]));
    Ok(())
}
