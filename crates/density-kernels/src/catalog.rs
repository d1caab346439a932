//! The fixed catalog of smoothing kernels
//!
//! Each kernel is a stateless unit struct. The compact kernels are non-zero
//! on `|u| <= 1` (boundary included) and zero elsewhere; Gaussian, Logistic
//! and Sigmoid are defined on the whole real line.
//!
//! | Kernel | Formula | Support |
//! |--------|---------|---------|
//! | [`Gaussian`] | `exp(-u²/2) / √(2π)` | ℝ |
//! | [`Boxcar`] | `1/2` | `[-1, 1]` |
//! | [`Triangular`] | `1 - |u|` | `[-1, 1]` |
//! | [`Epanechnikov`] | `3/4 (1 - u²)` | `[-1, 1]` |
//! | [`Quartic`] | `15/16 (1 - u²)²` | `[-1, 1]` |
//! | [`Triweight`] | `35/32 (1 - u²)³` | `[-1, 1]` |
//! | [`Tricube`] | `70/81 (1 - |u|³)³` | `[-1, 1]` |
//! | [`Cosine`] | `π/4 cos(πu/2)` | `[-1, 1]` |
//! | [`Logistic`] | `1 / (eᵘ + 2 + e⁻ᵘ)` | ℝ |
//! | [`Sigmoid`] | `2/π · 1 / (eᵘ + e⁻ᵘ)` | ℝ |

use crate::traits::{Kernel, KernelProperties};
use std::f64::consts::{FRAC_2_PI, FRAC_PI_2, FRAC_PI_4};

/// 1 / √(2π)
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// 70 / 81, truncated as in the published tricube tables
const TRICUBE_NORM: f64 = 0.86419753086;

#[inline]
fn within_unit(u: f64) -> bool {
    u.abs() <= 1.0
}

/// Standard normal density
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gaussian;

impl Kernel for Gaussian {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        INV_SQRT_2PI * (-0.5 * u * u).exp()
    }
}

/// Rectangular window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boxcar;

/// Alias for [`Boxcar`]
pub type Uniform = Boxcar;

impl Kernel for Boxcar {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        if within_unit(u) {
            0.5
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Triangular;

impl Kernel for Triangular {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        let abs_u = u.abs();
        if abs_u <= 1.0 {
            1.0 - abs_u
        } else {
            0.0
        }
    }
}

/// Parabolic kernel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Epanechnikov;

impl Kernel for Epanechnikov {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        if within_unit(u) {
            0.75 * (1.0 - u * u)
        } else {
            0.0
        }
    }
}

/// Biweight kernel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Quartic;

/// Alias for [`Quartic`]
pub type Biweight = Quartic;

impl Kernel for Quartic {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        if within_unit(u) {
            let t = 1.0 - u * u;
            0.9375 * (t * t)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Triweight;

impl Kernel for Triweight {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        if within_unit(u) {
            let t = 1.0 - u * u;
            1.09375 * (t * t * t)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tricube;

impl Kernel for Tricube {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        let abs_u = u.abs();
        if abs_u <= 1.0 {
            let t = 1.0 - abs_u * abs_u * abs_u;
            TRICUBE_NORM * (t * t * t)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cosine;

impl Kernel for Cosine {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        if within_unit(u) {
            FRAC_PI_4 * (FRAC_PI_2 * u).cos()
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Logistic;

impl Kernel for Logistic {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        1.0 / (u.exp() + 2.0 + (-u).exp())
    }
}

/// Hyperbolic secant kernel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sigmoid;

impl Kernel for Sigmoid {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        FRAC_2_PI * (1.0 / (u.exp() + (-u).exp()))
    }
}

macro_rules! impl_properties {
    ($($kernel:ty => ($name:literal, $support:expr)),* $(,)?) => {
        $(
            impl KernelProperties for $kernel {
                fn name(&self) -> &'static str {
                    $name
                }

                fn support(&self) -> Option<f64> {
                    $support
                }
            }
        )*
    };
}

impl_properties! {
    Gaussian => ("gaussian", None),
    Boxcar => ("boxcar", Some(1.0)),
    Triangular => ("triangular", Some(1.0)),
    Epanechnikov => ("epanechnikov", Some(1.0)),
    Quartic => ("quartic", Some(1.0)),
    Triweight => ("triweight", Some(1.0)),
    Tricube => ("tricube", Some(1.0)),
    Cosine => ("cosine", Some(1.0)),
    Logistic => ("logistic", None),
    Sigmoid => ("sigmoid", None),
}
