use rand::RngCore;

use super::{types::Height, Ascend, Comparator, Error, Options, SkipMap};

/// The builder to build [`SkipMap`]
#[derive(Debug, Clone, Copy)]
pub struct Builder<C = Ascend> {
  opts: Options,
  cmp: C,
}

impl Default for Builder {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Builder {
  /// Create a new `Builder` with default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      opts: Options::new(),
      cmp: Ascend,
    }
  }
}

impl<C> Builder<C> {
  /// Returns a new map builder with the new [`Comparator`](super::Comparator).
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::{Builder, Descend};
  ///
  /// let builder = Builder::new().with_comparator(Descend);
  /// ```
  #[inline]
  pub fn with_comparator<NC>(self, cmp: NC) -> Builder<NC> {
    Builder {
      cmp,
      opts: self.opts,
    }
  }

  /// Returns a new map builder with the new [`Options`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::{Builder, Options};
  ///
  /// let builder = Builder::new().with_options(Options::new().with_key_size(8));
  /// ```
  #[inline]
  pub fn with_options(mut self, opts: Options) -> Self {
    self.opts = opts;
    self
  }

  /// Sets the fixed size, in bytes, of every key.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::Builder;
  ///
  /// let builder = Builder::new().with_key_size(4);
  /// assert_eq!(builder.options().key_size(), 4);
  /// ```
  #[inline]
  pub fn with_key_size(mut self, key_size: usize) -> Self {
    self.opts = self.opts.with_key_size(key_size);
    self
  }

  /// Sets the maximum height of the towers.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::{Builder, Height};
  ///
  /// let builder = Builder::new().with_max_height(Height::from_u8_unchecked(20));
  /// ```
  #[inline]
  pub fn with_max_height(mut self, height: Height) -> Self {
    self.opts = self.opts.with_max_height(height);
    self
  }

  /// Sets how many nodes the map preallocates room for.
  #[inline]
  pub fn with_capacity(mut self, capacity: u32) -> Self {
    self.opts = self.opts.with_capacity(capacity);
    self
  }

  /// Seeds the level generator, so node heights are the same on every run.
  #[inline]
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.opts = self.opts.with_seed(seed);
    self
  }

  /// Returns the options of the builder.
  #[inline]
  pub const fn options(&self) -> &Options {
    &self.opts
  }

  /// Returns the comparator of the builder.
  #[inline]
  pub const fn comparator(&self) -> &C {
    &self.cmp
  }
}

impl<C: Comparator> Builder<C> {
  /// Builds a [`SkipMap`].
  ///
  /// # Errors
  ///
  /// - Returns [`Error::ZeroKeySize`] if no key size was set.
  /// - Returns [`Error::Entropy`] if no seed was set and the operating system random source
  ///   failed.
  /// - Returns [`Error::Allocation`] if the initial capacity could not be reserved.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::{Builder, Descend, SkipMap};
  ///
  /// let mut map: SkipMap<u32, _> = Builder::new()
  ///   .with_key_size(1)
  ///   .with_comparator(Descend)
  ///   .with_seed(42)
  ///   .build()
  ///   .unwrap();
  /// map.insert(b"a", 1).unwrap();
  /// map.insert(b"b", 2).unwrap();
  /// assert_eq!(map.front(), Some(&2));
  /// ```
  #[inline]
  pub fn build<V>(self) -> Result<SkipMap<V, C>, Error> {
    SkipMap::with_options_and_comparator(self.opts, self.cmp)
  }

  /// Builds a [`SkipMap`] which draws node heights from the given random source.
  #[inline]
  pub fn build_with_rng<V, R: RngCore>(self, rng: R) -> Result<SkipMap<V, C, R>, Error> {
    SkipMap::with_rng(self.opts, self.cmp, rng)
  }
}
