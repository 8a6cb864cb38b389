//! Shape sources - which catalog entry the next piece uses
//!
//! Gameplay draws uniformly at random. Tests and replays inject a
//! deterministic sequence instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the catalog index of the next piece
pub trait ShapeSource: Send {
    /// Return an index in `0..catalog_len` (`catalog_len` is never zero)
    fn next_index(&mut self, catalog_len: usize) -> usize;
}

/// Uniformly random shape choice
#[derive(Debug, Clone)]
pub struct RandomShapes {
    rng: StdRng,
}

impl RandomShapes {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl ShapeSource for RandomShapes {
    fn next_index(&mut self, catalog_len: usize) -> usize {
        self.rng.random_range(0..catalog_len.max(1))
    }
}

/// Deterministic source cycling through a fixed list of indices
///
/// Indices past the end of the catalog wrap around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceShapes {
    indices: Vec<usize>,
    pos: usize,
}

impl SequenceShapes {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, pos: 0 }
    }

    /// Always the same catalog entry
    pub fn repeat(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl ShapeSource for SequenceShapes {
    fn next_index(&mut self, catalog_len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.pos % self.indices.len()];
        self.pos = self.pos.wrapping_add(1);
        index % catalog_len.max(1)
    }
}
