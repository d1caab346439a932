//! Core types for kernel density estimation
//!
//! This crate provides the foundation shared by the kernel catalog, the
//! bandwidth rules and the estimator:
//!
//! - [`Error`] / [`Result`]: the unified error type for every density crate
//! - [`Numeric`]: element types accepted as samples, widened to `f64`
//! - [`stats`]: mean, Bessel-corrected standard deviation and selection-based
//!   order statistics
//! - [`grid`]: evenly spaced evaluation grids
//!
//! # Example
//!
//! ```rust
//! use density_core::{grid::linspace, numeric::widen, stats};
//!
//! let sample = widen(&[6.2f32, 5.1, 1.9, -0.4, -1.3, -2.1]);
//! let sd = stats::std_dev(&sample).unwrap();
//! assert!(sd > 3.4 && sd < 3.5);
//!
//! let xs = linspace(-7.0, 11.0, 10);
//! assert_eq!(xs.len(), 10);
//! ```

pub mod error;
pub mod grid;
pub mod numeric;
pub mod stats;

pub use error::{validate_bandwidth, Error, Result};
pub use grid::linspace;
pub use numeric::{widen, Numeric};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::linspace;
    pub use crate::numeric::Numeric;
}
