//! Bandwidth selection for kernel density estimation
//!
//! The bandwidth `h` controls how far each observation's kernel spreads. This
//! crate provides:
//!
//! - [`ScottRule`]: `h = 1.06 · σ · n^(-1/5)`
//! - [`SilvermanRule`]: `h = 0.9 · min(σ, IQR / 1.34) · n^(-1/5)`, with the
//!   IQR taken from selected (not interpolated) order statistics
//! - [`FixedBandwidth`]: a caller-supplied value
//! - [`Bandwidth`]: the serializable policy enum dispatching to the above
//!
//! σ is the Bessel-corrected standard deviation, so both rules need at least
//! two observations. Every selector rejects a bandwidth that is zero,
//! negative or non-finite instead of letting it reach the density sum.
//!
//! # Example
//!
//! ```rust
//! use density_bandwidth::{Bandwidth, BandwidthSelector};
//!
//! let sample = [6.2, 5.1, 1.9, -0.4, -1.3, -2.1];
//! let h = Bandwidth::Scott.select(&sample).unwrap();
//! assert!((h - 2.557346).abs() < 1e-6);
//!
//! assert!(Bandwidth::Silverman.select(&[1.0]).is_err());
//! ```

pub mod policy;
pub mod rules;
pub mod summary;
pub mod traits;

pub use policy::Bandwidth;
pub use rules::{quartile_indices, selection_iqr, FixedBandwidth, ScottRule, SilvermanRule};
pub use summary::SampleSummary;
pub use traits::BandwidthSelector;
