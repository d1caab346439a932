//! Core traits for bandwidth selection

use density_core::Result;

/// Chooses the smoothing width `h` for a sample
///
/// Implementations receive the sample already widened to `f64`. They must not
/// reorder the caller's data; rules that need order statistics work on a copy.
/// A returned bandwidth is always a positive normal number.
pub trait BandwidthSelector {
    /// Select a bandwidth for the given sample
    fn select(&self, sample: &[f64]) -> Result<f64>;

    /// Name of this selection rule for logging
    fn name(&self) -> &str;
}
