use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of every random choice the games make.
///
/// Seeded shufflers replay the same sequence, which keeps the game state
/// machines deterministic under test.
#[derive(Clone, Debug)]
pub struct Shuffler {
    rng: StdRng,
}

impl Shuffler {
    /// Seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is configured, from entropy otherwise.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// An independent shuffler seeded from this one.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::seeded(self.rng.random())
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    #[must_use]
    pub fn shuffled<T>(&mut self, mut items: Vec<T>) -> Vec<T> {
        self.shuffle(&mut items);
        items
    }

    /// Up to `count` items drawn without replacement, in random order.
    #[must_use]
    pub fn sample<T>(&mut self, items: Vec<T>, count: usize) -> Vec<T> {
        let mut items = self.shuffled(items);
        items.truncate(count);
        items
    }

    /// A random permutation of `0..len`.
    #[must_use]
    pub fn permutation(&mut self, len: usize) -> Vec<usize> {
        self.shuffled((0..len).collect())
    }

    /// Uniform index into a sequence of `len` items; `None` when empty.
    #[must_use]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}
