use arbitrary_int::{u5, Number, TryNewError};

macro_rules! impl_eq_and_ord {
  ($name:ident($inner:ident < $upper:ident) -> [$($target:ident),+ $(,)?]) => {
    $(
      impl PartialEq<$target> for $name {
        #[inline]
        fn eq(&self, other: &$target) -> bool {
          let val: $upper = self.0.value();
          (val as u128).eq(&(*other as u128))
        }
      }

      impl PartialOrd<$target> for $name {
        #[inline]
        fn partial_cmp(&self, other: &$target) -> Option<core::cmp::Ordering> {
          let val: $upper = self.0.value();
          (val as u128).partial_cmp(&(*other as u128))
        }
      }
    )*
  };
}

macro_rules! impl_try_from_for_ux_wrapper {
  ($name:ident($inner:ident < $upper:ident) { min: $min:expr } -> [$($target:ident),+ $(,)?]) => {
    $(
      paste::paste! {
        impl TryFrom<$target> for $name {
          type Error = TryNewError;

          #[inline]
          fn try_from(value: $target) -> Result<Self, Self::Error> {
            Self::[< try_from_ $target >](value)
          }
        }

        impl $name {
          #[doc = "Try to create a " $name " from the given `" $target "`."]
          #[inline]
          pub fn [< try_from_ $target >](val: $target) -> Result<Self, TryNewError> {
            let min = $min as $target;
            if val < min {
              return Err(TryNewError {});
            }
            let val = $upper::try_from(val).map_err(|_| TryNewError {})?;
            $inner::try_new(val).map(Self)
          }
        }
      }
    )*
  };
}

macro_rules! impl_into_for_ux_wrapper {
  ($name:ident($inner:ident < $upper:ident) -> [$($target:ident),+ $(,)?]) => {
    $(
      paste::paste! {
        impl From<$name> for $target {
          #[inline]
          fn from(val: $name) -> Self {
            val.[< to_ $target >]()
          }
        }

        impl $name {
          #[doc = "Converts the " $name " to a `" $target "`."]
          #[inline]
          pub const fn [< to_ $target >](&self) -> $target {
            self.0.value() as $target
          }
        }
      }
    )*
  };
}

macro_rules! ux_wrapper {
  (
    $(
      $([$meta:meta])*
      $name:ident($inner:ident < $upper:ident) {
        min: $min:expr,
        default: $default:expr,
        ord: [$($ord_target:ident),* $(,)?],
        try_from: [$($try_from_target:ident),* $(,)?],
        into: [$($into_target:ident),* $(,)?],
      }
    ),+ $(,)?
  ) => {
    $(
      $(#[$meta])*
      #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
      pub struct $name($inner);

      paste::paste! {
        impl $name {
          #[doc = "The maximum value of the " $name "."]
          pub const MAX: Self = Self($inner::MAX);

          #[doc = "The minimum value of the " $name "."]
          pub const MIN: Self = Self($inner::new($min));

          #[doc = "Creates a new " $name " with the default value."]
          #[inline]
          pub const fn new() -> Self {
            Self($inner::new($default))
          }

          #[doc = "Creates a new " $name " from the given `" $upper "`."]
          ///
          /// # Panics
          #[doc = "- If the given value is less than `" $name "::MIN` or greater than `" $name "::MAX`."]
          #[inline]
          pub const fn [< from_ $upper _unchecked >](val: $upper) -> Self {
            assert!(val >= $min, "value is less than the minimum");
            Self($inner::new(val))
          }
        }
      }

      impl Default for $name {
        #[inline]
        fn default() -> Self {
          Self::new()
        }
      }

      impl core::fmt::Display for $name {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
          write!(f, "{}", self.0.value())
        }
      }

      impl_eq_and_ord!($name($inner < $upper) -> [$($ord_target),*]);

      impl_try_from_for_ux_wrapper!($name($inner < $upper) { min: $min } -> [$($try_from_target),*]);

      impl_into_for_ux_wrapper!($name($inner < $upper) -> [$($into_target),*]);
    )*
  };
}

ux_wrapper! {
  [doc = "Height which is used to configure the maximum tower height of a skiplist, it is a 5-bit unsigned integer in `1..=31`."]
  Height(u5 < u8) {
    min: 1,
    default: 10,
    ord: [u8, u16, u32, u64, usize],
    try_from: [u8, u16, u32, u64, usize],
    into: [u8, u16, u32, u64, usize],
  },
}
