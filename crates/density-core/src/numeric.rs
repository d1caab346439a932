//! Numeric element types accepted as samples and evaluation points
//!
//! Samples may be integers or floats of any width. Every value is widened to
//! `f64` before any arithmetic so that accumulation happens in double
//! precision regardless of the caller's element type.
//!
//! Non-numeric element types are rejected at compile time: they simply do not
//! implement [`Numeric`].

use bytemuck::Pod;
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Base trait for numeric types that can be used as KDE input
pub trait Numeric: Pod + AsPrimitive<f64> + PartialOrd + Debug + Send + Sync {
    /// Widen to `f64` for density computations
    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_finite(&self) -> bool {
                    <$t>::is_finite(*self)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_finite(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_numeric_float!(f32, f64);
impl_numeric_int!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Copy a borrowed slice into a freshly allocated `f64` buffer.
///
/// The input is never modified; callers that need to partition or sort the
/// values work on the returned copy.
pub fn widen<T: Numeric>(data: &[T]) -> Vec<f64> {
    data.iter().map(|&x| x.to_f64()).collect()
}

/// True when every value in the slice is finite.
pub fn all_finite<T: Numeric>(data: &[T]) -> bool {
    data.iter().all(Numeric::is_finite)
}
