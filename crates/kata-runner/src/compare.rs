//! Result comparison
//!
//! Floats can be compared with a decimal precision; everything else uses
//! structural equality (`PartialEq`), which for sequences, maps and sets
//! compares element by element rather than by identity.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// A value a case can produce and be checked against
pub trait Compare: Debug {
    /// Does `self` (the actual value) satisfy `expected`?
    ///
    /// `precision` is the number of decimal places for floating point
    /// comparison. Types other than `f32`/`f64` ignore it.
    fn satisfies(&self, expected: &Self, precision: Option<i32>) -> bool;
}

/// Absolute-difference comparison: `|actual - expected| < 10^-precision`.
///
/// The inequality is strict, so a difference of exactly `10^-precision`
/// fails. NaN never matches.
pub fn within_tolerance(actual: f64, expected: f64, precision: i32) -> bool {
    (actual - expected).abs() < 10f64.powi(precision.saturating_neg())
}

/// Implement [`Compare`] with plain `==` for types that have `PartialEq`.
///
/// ```
/// #[derive(Debug, PartialEq)]
/// struct Point(i32, i32);
///
/// kata_runner::compare_by_eq!(Point);
/// ```
#[macro_export]
macro_rules! compare_by_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Compare for $ty {
                fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
                    self == expected
                }
            }
        )+
    };
}

compare_by_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String, ()
);

macro_rules! compare_float {
    ($($ty:ty),+) => {
        $(
            impl Compare for $ty {
                fn satisfies(&self, expected: &Self, precision: Option<i32>) -> bool {
                    match precision {
                        Some(p) => within_tolerance(f64::from(*self), f64::from(*expected), p),
                        None => self == expected,
                    }
                }
            }
        )+
    };
}

compare_float!(f32, f64);

impl<T: Compare + ?Sized> Compare for &T {
    fn satisfies(&self, expected: &Self, precision: Option<i32>) -> bool {
        (**self).satisfies(*expected, precision)
    }
}

impl<T: Compare + ?Sized> Compare for Box<T> {
    fn satisfies(&self, expected: &Self, precision: Option<i32>) -> bool {
        (**self).satisfies(expected, precision)
    }
}

// Containers compare structurally. Precision only applies to bare floats, so
// `Vec<f64>` and friends use exact element equality.

impl<T: PartialEq + Debug> Compare for [T] {
    fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
        self == expected
    }
}

impl<T: PartialEq + Debug, const N: usize> Compare for [T; N] {
    fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
        self == expected
    }
}

impl<T: PartialEq + Debug> Compare for Vec<T> {
    fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
        self == expected
    }
}

impl<T: PartialEq + Debug> Compare for VecDeque<T> {
    fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
        self == expected
    }
}

impl<T: PartialEq + Debug> Compare for Option<T> {
    fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
        self == expected
    }
}

impl<T: PartialEq + Debug, E: PartialEq + Debug> Compare for Result<T, E> {
    fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
        self == expected
    }
}

impl<K, V, S> Compare for HashMap<K, V, S>
where
    K: Eq + Hash + Debug,
    V: PartialEq + Debug,
    S: BuildHasher,
{
    fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
        self == expected
    }
}

impl<T, S> Compare for HashSet<T, S>
where
    T: Eq + Hash + Debug,
    S: BuildHasher,
{
    fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
        self == expected
    }
}

impl<K: PartialEq + Debug, V: PartialEq + Debug> Compare for BTreeMap<K, V> {
    fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
        self == expected
    }
}

impl<T: PartialEq + Debug> Compare for BTreeSet<T> {
    fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
        self == expected
    }
}

macro_rules! compare_tuple {
    ($($name:ident),+) => {
        impl<$($name: PartialEq + Debug),+> Compare for ($($name,)+) {
            fn satisfies(&self, expected: &Self, _precision: Option<i32>) -> bool {
                self == expected
            }
        }
    };
}

compare_tuple!(A);
compare_tuple!(A, B);
compare_tuple!(A, B, C);
compare_tuple!(A, B, C, D);
compare_tuple!(A, B, C, D, E);
compare_tuple!(A, B, C, D, E, F);
