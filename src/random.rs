use rand::{rngs::SmallRng, RngCore, SeedableRng};

use super::{types::Height, Error};

/// The largest tower any map can be configured with.
pub(crate) const MAX_LEVELS: usize = Height::MAX.to_usize();

/// Precompute the skiplist probabilities so that only a single random number
/// needs to be generated per node. Each level is half as likely as the one below it.
const PROBABILITIES: [u32; MAX_LEVELS] = {
  const P: f64 = 0.5;

  let mut probabilities = [0; MAX_LEVELS];
  let mut p = 1f64;

  let mut i = 0;
  while i < MAX_LEVELS {
    probabilities[i] = ((u32::MAX as f64) * p) as u32;
    p *= P;
    i += 1;
  }

  probabilities
};

/// Decides the height of new nodes.
///
/// The generator owns its random source, so every map has its own, independently seeded,
/// stream of heights.
#[derive(Debug, Clone)]
pub struct LevelGenerator<R = SmallRng> {
  rng: R,
}

impl LevelGenerator {
  /// Creates a generator seeded from the operating system.
  pub fn from_os_rng() -> Result<Self, Error> {
    SmallRng::try_from_os_rng()
      .map(Self::new)
      .map_err(|_| Error::Entropy)
  }

  /// Creates a generator with a fixed seed, which yields the same heights on every run.
  #[inline]
  pub fn seeded(seed: u64) -> Self {
    Self::new(SmallRng::seed_from_u64(seed))
  }
}

impl<R> LevelGenerator<R> {
  /// Creates a generator backed by the given random source.
  #[inline]
  pub const fn new(rng: R) -> Self {
    Self { rng }
  }

  /// Consumes the generator, returning the random source.
  #[inline]
  pub fn into_inner(self) -> R {
    self.rng
  }
}

impl<R: RngCore> LevelGenerator<R> {
  /// Returns a height in `1..=max_height`, where `P(height >= k) = 2^-(k - 1)`.
  pub fn random_height(&mut self, max_height: Height) -> Height {
    let max = max_height.to_usize();
    let rnd = self.rng.next_u32();
    let mut h = 1;

    while h < max && rnd <= PROBABILITIES[h] {
      h += 1;
    }
    Height::from_u8_unchecked(h as u8)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const SAMPLES: usize = 100_000;

  #[test]
  fn test_height_bound() {
    let mut g = LevelGenerator::seeded(7);
    for max in 1..=31u8 {
      let max = Height::from_u8_unchecked(max);
      for _ in 0..1000 {
        let h = g.random_height(max);
        assert!(h >= 1u8);
        assert!(h <= max);
      }
    }
  }

  #[test]
  fn test_height_one() {
    let mut g = LevelGenerator::seeded(1);
    for _ in 0..1000 {
      assert_eq!(g.random_height(Height::MIN), 1u8);
    }
  }

  #[test]
  fn test_geometric_distribution() {
    let mut g = LevelGenerator::seeded(0xdead_beef);
    let mut at_least = [0usize; MAX_LEVELS + 1];
    for _ in 0..SAMPLES {
      let h = g.random_height(Height::MAX).to_usize();
      for slot in at_least.iter_mut().take(h + 1).skip(1) {
        *slot += 1;
      }
    }

    assert_eq!(at_least[1], SAMPLES);
    for k in 2..=4 {
      let ratio = at_least[k] as f64 / at_least[k - 1] as f64;
      assert!((0.46..0.54).contains(&ratio), "level {k} ratio {ratio}");
    }
  }

  #[test]
  fn test_seeded_is_reproducible() {
    let mut a = LevelGenerator::seeded(99);
    let mut b = LevelGenerator::seeded(99);
    for _ in 0..256 {
      assert_eq!(a.random_height(Height::new()), b.random_height(Height::new()));
    }
  }

  #[test]
  fn test_from_os_rng() {
    let mut g = LevelGenerator::from_os_rng().unwrap();
    assert!(g.random_height(Height::new()) <= Height::new());
  }
}
