//! Univariate kernel density estimation
//!
//! Given a sample `x₁..xₙ`, a smoothing kernel `K` and a bandwidth `h`, the
//! density at `x` is estimated as `1/(n·h) · Σ K((x − xᵢ)/h)`.
//!
//! - [`estimate`]: one-shot evaluation of a sample at a set of points
//! - [`estimate_or_empty`]: the same, mapping empty inputs to an empty result
//! - [`KernelDensity`]: a model fitted once and evaluated many times
//! - [`KdeConfig`] / [`KdeBuilder`]: kernel and bandwidth selection
//!
//! Samples and evaluation points may be any [`Numeric`] type; everything is
//! computed in `f64`. Kernels are pluggable: a [`KernelKind`], a catalog unit
//! struct, or any `Fn(f64) -> f64` closure.
//!
//! # Example
//!
//! ```rust
//! use density_estimate::{estimate, linspace, Bandwidth, KdeConfig, KernelKind};
//!
//! let sample = [6.2, 5.1, 1.9, -0.4, -1.3, -2.1];
//! let points = linspace(-7.0, 11.0, 10);
//!
//! let config = KdeConfig::builder()
//!     .kernel(KernelKind::Gaussian)
//!     .rule(Bandwidth::Silverman)
//!     .build()
//!     .unwrap();
//! let density = estimate(&sample, &points, &config).unwrap();
//! assert!((density[3] - 0.100008).abs() < 1e-5);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate points on the rayon thread pool

pub mod builder;
pub mod config;
pub mod estimator;

pub use builder::KdeBuilder;
pub use config::KdeConfig;
pub use estimator::{estimate, estimate_or_empty, KernelDensity};

pub use density_bandwidth::{Bandwidth, BandwidthSelector};
pub use density_core::{linspace, Error, Numeric, Result};
pub use density_kernels::{Kernel, KernelKind, KernelProperties};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        estimate, estimate_or_empty, Bandwidth, KdeConfig, Kernel, KernelDensity, KernelKind,
    };
    pub use density_core::prelude::*;
}
