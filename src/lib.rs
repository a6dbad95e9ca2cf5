#![doc = include_str!("../README.md")]
#![cfg_attr(not(all(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]
#![allow(clippy::type_complexity)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

use core::cmp;

mod builder;
pub use builder::Builder;

mod error;
pub use error::Error;

/// A map implementation based on skiplist
pub mod map;
pub use map::{Cursor, Insert, Iter, Keys, Remove, SkipMap, Values};

mod options;
pub use options::Options;

mod random;
pub use random::LevelGenerator;

mod types;
pub use types::Height;

pub use rand;

/// Comparator is used to define the ordering of the fixed-size keys stored in a [`SkipMap`].
///
/// Any closure of the shape `Fn(&[u8], &[u8]) -> Ordering` is a comparator as well, which makes it
/// easy to decode the key bytes into a domain type before comparing.
///
/// `Ordering::Equal` always means "same key".
pub trait Comparator {
  /// Compares two byte slices.
  fn compare(&self, a: &[u8], b: &[u8]) -> cmp::Ordering;
}

impl<F> Comparator for F
where
  F: Fn(&[u8], &[u8]) -> cmp::Ordering,
{
  #[inline]
  fn compare(&self, a: &[u8], b: &[u8]) -> cmp::Ordering {
    self(a, b)
  }
}

/// Ascend is a comparator that compares byte slices in ascending order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ascend;

impl Comparator for Ascend {
  #[inline]
  fn compare(&self, a: &[u8], b: &[u8]) -> cmp::Ordering {
    a.cmp(b)
  }
}

/// Descend is a comparator that compares byte slices in descending order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Descend;

impl Comparator for Descend {
  #[inline]
  fn compare(&self, a: &[u8], b: &[u8]) -> cmp::Ordering {
    b.cmp(a)
  }
}
