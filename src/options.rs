use crate::types::Height;

/// Options for [`SkipMap`](crate::SkipMap).
#[viewit::viewit(vis_all = "pub(super)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  key_size: usize,
  max_height: Height,
  capacity: u32,
  seed: Option<u64>,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  ///
  /// The key size defaults to `0`, which is rejected when the map is built, so it must always be
  /// set explicitly.
  #[inline]
  pub const fn new() -> Self {
    Self {
      key_size: 0,
      max_height: Height::new(),
      capacity: 0,
      seed: None,
    }
  }

  /// Sets the fixed size, in bytes, of every key stored in the map.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::Options;
  ///
  /// let opts = Options::new().with_key_size(4);
  /// assert_eq!(opts.key_size(), 4);
  /// ```
  #[inline]
  pub const fn with_key_size(mut self, key_size: usize) -> Self {
    self.key_size = key_size;
    self
  }

  /// Sets the maximum height of the towers.
  ///
  /// The default value is `10`. Every node height is drawn from `1..=max_height`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::{Options, Height};
  ///
  /// let options = Options::new().with_max_height(Height::from_u8_unchecked(16));
  /// assert_eq!(options.max_height(), 16u8);
  /// ```
  #[inline]
  pub const fn with_max_height(mut self, height: Height) -> Self {
    self.max_height = height;
    self
  }

  /// Sets how many nodes the map preallocates room for.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::Options;
  ///
  /// let options = Options::new().with_capacity(1024);
  /// assert_eq!(options.capacity(), 1024);
  /// ```
  #[inline]
  pub const fn with_capacity(mut self, capacity: u32) -> Self {
    self.capacity = capacity;
    self
  }

  /// Seeds the level generator with a fixed value, so node heights are reproducible.
  ///
  /// By default the level generator is seeded from the operating system.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::Options;
  ///
  /// let options = Options::new().with_seed(42);
  /// assert_eq!(options.seed(), Some(42));
  /// ```
  #[inline]
  pub const fn with_seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  /// Returns the fixed key size.
  #[inline]
  pub const fn key_size(&self) -> usize {
    self.key_size
  }

  /// Returns the maximum tower height.
  #[inline]
  pub const fn max_height(&self) -> Height {
    self.max_height
  }

  /// Returns the number of preallocated nodes.
  #[inline]
  pub const fn capacity(&self) -> u32 {
    self.capacity
  }

  /// Returns the seed of the level generator, if any.
  #[inline]
  pub const fn seed(&self) -> Option<u64> {
    self.seed
  }
}
