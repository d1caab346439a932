//! Kernel density estimation
//!
//! Umbrella crate re-exporting the workspace:
//!
//! - [`density_core`]: errors, numeric widening, summary statistics and grids
//! - [`density_kernels`]: the smoothing kernel catalog
//! - [`density_bandwidth`]: Scott, Silverman and explicit bandwidths
//! - [`density_estimate`]: the estimator itself
//!
//! ```rust
//! use kernel_density::prelude::*;
//!
//! let sample = [6.2, 5.1, 1.9, -0.4, -1.3, -2.1];
//! let config = KdeConfig::new(KernelKind::Gaussian, Bandwidth::Scott);
//! let density = estimate(&sample, &linspace(-7.0, 11.0, 10), &config).unwrap();
//! assert!((density[0] - 0.007307).abs() < 1e-5);
//! ```

pub use density_bandwidth;
pub use density_core;
pub use density_estimate;
pub use density_kernels;

pub use density_estimate::{
    estimate, estimate_or_empty, Bandwidth, Error, KdeBuilder, KdeConfig, KernelDensity, KernelKind, Result,
};

/// Everything needed for a typical estimate
pub mod prelude {
    pub use density_estimate::prelude::*;
    pub use density_kernels::KernelProperties;
}
