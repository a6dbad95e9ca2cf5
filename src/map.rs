use core::{
  cmp,
  sync::atomic::{AtomicUsize, Ordering},
};

use rand::{rngs::SmallRng, RngCore};

use super::{
  random::{LevelGenerator, MAX_LEVELS},
  types::Height,
  Ascend, Comparator, Error, Options,
};

mod api;

mod arena;
use arena::{Arena, HEAD};

mod cursor;
pub use cursor::Cursor;

mod iterator;
pub use iterator::*;

mod node;
use node::Node;

mod outcome;
pub use outcome::*;


/// Hands out a distinct id to every map, so a cursor can tell which map it belongs to.
static MAP_ID: AtomicUsize = AtomicUsize::new(0);

#[cfg(target_has_atomic = "ptr")]
#[inline]
fn next_map_id() -> usize {
  MAP_ID.fetch_add(1, Ordering::Relaxed)
}

/// Targets without atomic read-modify-write are single core, a load and a store are enough.
#[cfg(not(target_has_atomic = "ptr"))]
#[inline]
fn next_map_id() -> usize {
  let id = MAP_ID.load(Ordering::Relaxed);
  MAP_ID.store(id.wrapping_add(1), Ordering::Relaxed);
  id
}

/// The last node visited on every level during a descent. Only the first
/// `max_height` entries are meaningful.
type Splice = [u32; MAX_LEVELS];

/// An ordered map over fixed-size byte keys, implemented as a skiplist.
///
/// Every key has exactly [`key_size`](SkipMap::key_size) bytes and is ordered by the
/// [`Comparator`] the map was created with. Search, insertion and removal take expected
/// logarithmic time.
///
/// Nodes live in an arena owned by the map and link to each other by index. Each node is
/// assigned a random height when inserted; the node takes part in that many levels, and
/// levels above the height are never allocated.
///
/// The map is not synchronized. Mutation requires `&mut self`, so sharing a map between
/// threads needs an exclusive lock around the map and every [`Cursor`] used with it.
pub struct SkipMap<V, C = Ascend, R = SmallRng> {
  arena: Arena<V>,
  len: usize,
  max_height: Height,
  key_size: usize,
  id: usize,
  levels: LevelGenerator<R>,
  cmp: C,
}

impl<V> SkipMap<V> {
  /// Creates a new map for keys of `key_size` bytes, ordered by [`Ascend`].
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::SkipMap;
  ///
  /// let mut map = SkipMap::new(4).unwrap();
  /// map.insert(&7u32.to_be_bytes(), "seven").unwrap();
  /// assert_eq!(map.get(&7u32.to_be_bytes()), Some(&"seven"));
  /// ```
  #[inline]
  pub fn new(key_size: usize) -> Result<Self, Error> {
    Self::with_comparator(key_size, Ascend)
  }
}

impl<V, C: Comparator> SkipMap<V, C> {
  /// Creates a new map for keys of `key_size` bytes, ordered by `cmp`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use sklmap::SkipMap;
  ///
  /// let cmp = |a: &[u8], b: &[u8]| {
  ///   i32::from_le_bytes(a.try_into().unwrap()).cmp(&i32::from_le_bytes(b.try_into().unwrap()))
  /// };
  /// let mut map = SkipMap::with_comparator(4, cmp).unwrap();
  /// map.insert(&(-1i32).to_le_bytes(), 'a').unwrap();
  /// map.insert(&1i32.to_le_bytes(), 'b').unwrap();
  /// assert_eq!(map.first().unwrap().0, (-1i32).to_le_bytes());
  /// ```
  #[inline]
  pub fn with_comparator(key_size: usize, cmp: C) -> Result<Self, Error> {
    Self::with_options_and_comparator(Options::new().with_key_size(key_size), cmp)
  }

  /// Creates a new map from [`Options`] and a custom [`Comparator`].
  ///
  /// The level generator is seeded with [`Options::seed`] when set, and from the operating
  /// system otherwise.
  pub fn with_options_and_comparator(opts: Options, cmp: C) -> Result<Self, Error> {
    let levels = match opts.seed() {
      Some(seed) => LevelGenerator::seeded(seed),
      None => LevelGenerator::from_os_rng()?,
    };
    Self::with_level_generator(opts, cmp, levels)
  }
}

impl<V, C: Comparator, R: RngCore> SkipMap<V, C, R> {
  /// Creates a new map which draws node heights from the given random source.
  ///
  /// [`Options::seed`] is ignored.
  #[inline]
  pub fn with_rng(opts: Options, cmp: C, rng: R) -> Result<Self, Error> {
    Self::with_level_generator(opts, cmp, LevelGenerator::new(rng))
  }

  fn with_level_generator(opts: Options, cmp: C, levels: LevelGenerator<R>) -> Result<Self, Error> {
    if opts.key_size() == 0 {
      return Err(Error::ZeroKeySize);
    }

    let max_height = opts.max_height();
    let arena = Arena::new(max_height.to_usize(), opts.capacity() as usize)?;

    Ok(Self {
      arena,
      len: 0,
      max_height,
      key_size: opts.key_size(),
      id: next_map_id(),
      levels,
      cmp,
    })
  }
}

// --------------------------------Descent--------------------------------
impl<V, C: Comparator, R> SkipMap<V, C, R> {
  #[inline]
  fn compare(&self, idx: u32, key: &[u8]) -> cmp::Ordering {
    self.cmp.compare(self.arena.key(idx), key)
  }

  /// Returns the node holding `key`, walking from the top level down without
  /// recording predecessors.
  fn find(&self, key: &[u8]) -> Option<u32> {
    if self.len == 0 || key.len() != self.key_size {
      return None;
    }

    let mut curr = HEAD;
    for level in (0..self.max_height.to_usize()).rev() {
      while let Some(next) = self.arena.next(curr, level) {
        match self.compare(next, key) {
          cmp::Ordering::Less => curr = next,
          cmp::Ordering::Equal => return Some(next),
          cmp::Ordering::Greater => break,
        }
      }
    }
    None
  }

  /// Fills `spl` with the last node whose key is less than `key` on every level,
  /// and returns the node holding `key` if there is one.
  fn find_splice(&self, key: &[u8], spl: &mut Splice) -> Option<u32> {
    let mut curr = HEAD;
    for level in (0..self.max_height.to_usize()).rev() {
      while let Some(next) = self.arena.next(curr, level) {
        if self.compare(next, key) != cmp::Ordering::Less {
          break;
        }
        curr = next;
      }
      spl[level] = curr;
    }

    self
      .arena
      .next(curr, 0)
      .filter(|&next| self.compare(next, key) == cmp::Ordering::Equal)
  }

  /// Returns the first node whose key is greater than or equal to `key`.
  fn seek_ge(&self, key: &[u8]) -> Option<u32> {
    if self.len == 0 || key.len() != self.key_size {
      return None;
    }

    let mut curr = HEAD;
    for level in (0..self.max_height.to_usize()).rev() {
      while let Some(next) = self.arena.next(curr, level) {
        if self.compare(next, key) != cmp::Ordering::Less {
          break;
        }
        curr = next;
      }
    }
    self.arena.next(curr, 0)
  }

  /// Returns the last node on level 0.
  fn find_last(&self) -> Option<u32> {
    let mut curr = HEAD;
    for level in (0..self.max_height.to_usize()).rev() {
      while let Some(next) = self.arena.next(curr, level) {
        curr = next;
      }
    }
    (curr != HEAD).then_some(curr)
  }
}

// --------------------------------Mutation--------------------------------
impl<V, C: Comparator, R: RngCore> SkipMap<V, C, R> {
  fn insert_in(&mut self, key: &[u8], value: V) -> Result<Insert<V>, Error> {
    let mut spl = [HEAD; MAX_LEVELS];
    if let Some(found) = self.find_splice(key, &mut spl) {
      let old = self.arena.node_mut(found).replace_value(value);
      return Ok(Insert::Updated(old));
    }

    let height = self.levels.random_height(self.max_height).to_usize();

    // Everything that can fail happens before the first link is rewritten.
    let mut node = Node::try_new(key, value, height)?;
    for (level, link) in node.tower_mut().iter_mut().enumerate() {
      *link = self.arena.next(spl[level], level);
    }
    self.arena.reserve()?;

    let idx = self.arena.insert(node);
    for (level, &prev) in spl.iter().enumerate().take(height) {
      self.arena.tower_mut(prev)[level] = Some(idx);
    }
    self.len += 1;

    #[cfg(feature = "tracing")]
    tracing::trace!(index = idx, height, len = self.len, "spliced node");

    Ok(Insert::Inserted)
  }
}

impl<V, C: Comparator, R> SkipMap<V, C, R> {
  fn remove_in(&mut self, key: &[u8]) -> Remove<V> {
    if self.len == 0 || key.len() != self.key_size {
      return Remove::NotFound;
    }

    let mut spl = [HEAD; MAX_LEVELS];
    let Some(target) = self.find_splice(key, &mut spl) else {
      return Remove::NotFound;
    };

    // Detach: after this loop no level reaches the target.
    let height = self.arena.node(target).height();
    for (level, &prev) in spl.iter().enumerate().take(height) {
      let next = self.arena.next(target, level);
      let link = &mut self.arena.tower_mut(prev)[level];
      debug_assert_eq!(*link, Some(target));
      *link = next;
    }

    // Release: the slot is recycled under a new generation.
    let node = self.arena.release(target);
    self.len -= 1;

    #[cfg(feature = "tracing")]
    tracing::trace!(index = target, height, len = self.len, "unspliced node");

    Remove::Removed(node.into_value())
  }
}

impl<V, C, R> SkipMap<V, C, R> {
  /// Unlinks and releases every node in level-0 order, handing each value to `f`.
  fn drain_with(&mut self, mut f: impl FnMut(V)) {
    let mut next = self.arena.next(HEAD, 0);
    while let Some(idx) = next {
      next = self.arena.next(idx, 0);
      f(self.arena.release(idx).into_value());
    }
    self.arena.tower_mut(HEAD).fill(None);
    self.len = 0;
  }
}

impl<V, C, R> core::fmt::Debug for SkipMap<V, C, R>
where
  V: core::fmt::Debug,
  C: Comparator,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}
