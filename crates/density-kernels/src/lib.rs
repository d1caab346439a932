//! Smoothing kernels for kernel density estimation
//!
//! This crate provides the [`Kernel`] abstraction and a fixed catalog of
//! symmetric, non-negative kernels that integrate to one:
//!
//! - Compact support on `[-1, 1]`: [`Boxcar`], [`Triangular`],
//!   [`Epanechnikov`], [`Quartic`], [`Triweight`], [`Tricube`], [`Cosine`]
//! - Infinite support: [`Gaussian`], [`Logistic`], [`Sigmoid`]
//!
//! The catalog is open: any `Fn(f64) -> f64` closure is a [`Kernel`], and
//! [`KernelKind`] selects catalog kernels by name at runtime.
//!
//! # Example
//!
//! ```rust
//! use density_kernels::{Gaussian, Kernel, KernelKind};
//!
//! assert!((Gaussian.evaluate(0.0) - 0.398942).abs() < 1e-6);
//!
//! let kind: KernelKind = "epanechnikov".parse().unwrap();
//! assert_eq!(kind.evaluate(0.0), 0.75);
//! ```

pub mod catalog;
pub mod registry;
pub mod traits;

pub use catalog::{
    Biweight, Boxcar, Cosine, Epanechnikov, Gaussian, Logistic, Quartic, Sigmoid, Triangular,
    Tricube, Triweight, Uniform,
};
pub use registry::KernelKind;
pub use traits::{Kernel, KernelProperties};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Gaussian, Kernel, KernelKind, KernelProperties};
}
