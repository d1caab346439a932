//! Rule-of-thumb and fixed bandwidth selectors

use crate::summary::SampleSummary;
use crate::traits::BandwidthSelector;
use density_core::{stats, validate_bandwidth, Result};
use tracing::debug;

/// Scott's rule multiplier
pub const SCOTT_FACTOR: f64 = 1.06;

/// Silverman's rule multiplier
pub const SILVERMAN_FACTOR: f64 = 0.9;

/// IQR of a standard normal, used to put the IQR on the σ scale
pub const NORMAL_IQR: f64 = 1.34;

/// Scott's rule: `h = 1.06 · σ · n^(-1/5)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScottRule;

impl BandwidthSelector for ScottRule {
    fn select(&self, sample: &[f64]) -> Result<f64> {
        let summary = SampleSummary::from_sample(sample)?;
        let h = SCOTT_FACTOR * summary.std_dev * summary.rate();
        debug!("Scott bandwidth: n={}, sigma={:.6}, h={:.6}", summary.n, summary.std_dev, h);
        validate_bandwidth(h)
    }

    fn name(&self) -> &str {
        "scott"
    }
}

/// Silverman's rule: `h = 0.9 · min(σ, IQR / 1.34) · n^(-1/5)`
///
/// The IQR comes from two order statistics picked by selection, not from
/// interpolated quartiles; see [`quartile_indices`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SilvermanRule;

impl BandwidthSelector for SilvermanRule {
    fn select(&self, sample: &[f64]) -> Result<f64> {
        let summary = SampleSummary::from_sample(sample)?;
        let iqr = selection_iqr(sample)?;
        let spread = summary.std_dev.min(iqr / NORMAL_IQR);
        let h = SILVERMAN_FACTOR * spread * summary.rate();
        debug!(
            "Silverman bandwidth: n={}, sigma={:.6}, iqr={:.6}, h={:.6}",
            summary.n, summary.std_dev, iqr, h
        );
        validate_bandwidth(h)
    }

    fn name(&self) -> &str {
        "silverman"
    }
}

/// A caller-supplied bandwidth, used as-is after validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedBandwidth(pub f64);

impl BandwidthSelector for FixedBandwidth {
    fn select(&self, _sample: &[f64]) -> Result<f64> {
        validate_bandwidth(self.0)
    }

    fn name(&self) -> &str {
        "custom"
    }
}

/// Order-statistic indices `(q1, q3)` used for the interquartile range
///
/// With `mid = n / 2` and `q1 = mid / 2` (integer division), `q3` is
/// `mid + q1` for even `n` and `mid + q1 + 1` for odd `n`.
pub fn quartile_indices(n: usize) -> (usize, usize) {
    let mid = n / 2;
    let q1 = mid / 2;
    let q3 = if n % 2 == 0 { mid + q1 } else { mid + q1 + 1 };
    (q1, q3)
}

/// Interquartile range from selected order statistics
///
/// Works on a private copy; the caller's sample keeps its order.
pub fn selection_iqr(sample: &[f64]) -> Result<f64> {
    let (q1_idx, q3_idx) = quartile_indices(sample.len());
    let mut scratch = sample.to_vec();
    let q1 = stats::order_statistic(&mut scratch, q1_idx)?;
    let q3 = stats::order_statistic(&mut scratch, q3_idx)?;
    Ok(q3 - q1)
}
