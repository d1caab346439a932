//! Kernel density estimation over a borrowed sample
//!
//! The estimate at a point `x` is
//!
//! ```text
//! f(x) = 1 / (n·h) · Σ K((x − xᵢ) / h)
//! ```
//!
//! The sum runs over the sample in the order given and the normalization
//! constant is computed once per estimate, so repeated calls with the same
//! inputs are bit-for-bit identical. With the `parallel` feature the
//! evaluation points are spread over the rayon pool; each per-point sum is
//! still sequential, so the results do not change.

use crate::config::KdeConfig;
use density_bandwidth::BandwidthSelector;
use density_core::{
    grid::linspace,
    numeric::{all_finite, widen},
    stats::min_max,
    Error, Numeric, Result,
};
use density_kernels::{Kernel, KernelProperties};
use tracing::{debug, instrument, warn};

/// Infinite-support kernels are swept this many bandwidths past the data.
const UNBOUNDED_SWEEP_PADDING: f64 = 3.0;

/// Estimate the density of `sample` at every point of `points`.
///
/// Returns one density per evaluation point, in the same order. The sample
/// and points may have different numeric types; both are widened to `f64`
/// before any arithmetic and neither is modified.
///
/// # Errors
///
/// - [`Error::EmptySample`] / [`Error::EmptyEvaluationSet`] when either input
///   is empty (see [`estimate_or_empty`] for the empty-result convention)
/// - [`Error::NonFinite`] when either input holds NaN or infinity
/// - [`Error::InsufficientData`] when a rule needs two observations
/// - [`Error::InvalidBandwidth`] when the bandwidth is not a positive normal
///   number or `1/(n·h)` overflows
///
/// # Example
///
/// ```rust
/// use density_estimate::{estimate, Bandwidth, KdeConfig, KernelKind};
///
/// let sample = [6.2, 5.1, 1.9, -0.4, -1.3, -2.1];
/// let config = KdeConfig::new(KernelKind::Boxcar, Bandwidth::Custom(1.5));
/// let density = estimate(&sample, &[-1.0, 20.0], &config).unwrap();
/// assert!((density[0] - 0.166667).abs() < 1e-6);
/// assert_eq!(density[1], 0.0);
/// ```
#[instrument(skip(sample, points, config), fields(n = sample.len(), m = points.len()))]
pub fn estimate<T, U, K>(sample: &[T], points: &[U], config: &KdeConfig<K>) -> Result<Vec<f64>>
where
    T: Numeric,
    U: Numeric,
    K: Kernel,
{
    check_not_empty(sample, points)?;
    let data = finite_values(sample, "sample")?;
    let xs = finite_values(points, "evaluation points")?;

    let h = config.bandwidth.select(&data)?;
    let norm = normalization(data.len(), h)?;
    debug!("Evaluating {} points with bandwidth {}", xs.len(), h);

    Ok(evaluate_all(&data, &xs, h, norm, &config.kernel))
}

/// Like [`estimate`], but an empty sample or evaluation set yields an empty
/// vector instead of an error. Every other failure is still reported.
pub fn estimate_or_empty<T, U, K>(
    sample: &[T],
    points: &[U],
    config: &KdeConfig<K>,
) -> Result<Vec<f64>>
where
    T: Numeric,
    U: Numeric,
    K: Kernel,
{
    match estimate(sample, points, config) {
        Err(e) if e.is_empty_input() => Ok(Vec::new()),
        other => other,
    }
}

/// A density estimate fitted to one sample.
///
/// Fitting widens the sample and resolves the bandwidth once, so the model can
/// be evaluated repeatedly without selecting `h` again.
///
/// ```rust
/// use density_estimate::{Bandwidth, KdeConfig, KernelDensity, KernelKind};
///
/// let sample = [6.2f32, 5.1, 1.9, -0.4, -1.3, -2.1];
/// let kde = KernelDensity::fit(&sample, KdeConfig::new(KernelKind::Gaussian, Bandwidth::Scott)).unwrap();
/// assert!((kde.bandwidth() - 2.557346).abs() < 1e-6);
///
/// let (xs, ys) = kde.sweep(64).unwrap();
/// assert_eq!(xs.len(), ys.len());
/// ```
#[derive(Debug, Clone)]
pub struct KernelDensity<K> {
    sample: Vec<f64>,
    bandwidth: f64,
    norm: f64,
    kernel: K,
}

impl<K: Kernel> KernelDensity<K> {
    /// Fit the model: validate the sample and select the bandwidth.
    #[instrument(skip(sample, config), fields(n = sample.len()))]
    pub fn fit<T: Numeric>(sample: &[T], config: KdeConfig<K>) -> Result<Self> {
        if sample.is_empty() {
            warn!("Empty sample: no density can be estimated");
            return Err(Error::EmptySample);
        }
        let sample = finite_values(sample, "sample")?;
        let bandwidth = config.bandwidth.select(&sample)?;
        let norm = normalization(sample.len(), bandwidth)?;
        debug!("Fitted {} observations with bandwidth {}", sample.len(), bandwidth);

        Ok(Self {
            sample,
            bandwidth,
            norm,
            kernel: config.kernel,
        })
    }

    /// Selected bandwidth
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Number of observations the model was fitted to
    pub fn sample_size(&self) -> usize {
        self.sample.len()
    }

    /// The kernel in use
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Density at a single point
    pub fn density(&self, x: f64) -> Result<f64> {
        if !x.is_finite() {
            return Err(Error::non_finite("evaluation point"));
        }
        Ok(density_at(&self.sample, x, self.bandwidth, self.norm, &self.kernel))
    }

    /// Density at every point, in order.
    pub fn evaluate<U: Numeric>(&self, points: &[U]) -> Result<Vec<f64>> {
        if points.is_empty() {
            warn!("Empty evaluation set: nothing to evaluate");
            return Err(Error::EmptyEvaluationSet);
        }
        let xs = finite_values(points, "evaluation points")?;
        Ok(evaluate_all(&self.sample, &xs, self.bandwidth, self.norm, &self.kernel))
    }

    /// Evaluate `npoints` evenly spaced points from `start` to `end` inclusive.
    pub fn sweep_range(
        &self,
        start: f64,
        end: f64,
        npoints: usize,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::non_finite("sweep range"));
        }
        let xs = linspace(start, end, npoints);
        let ys = evaluate_all(&self.sample, &xs, self.bandwidth, self.norm, &self.kernel);
        Ok((xs, ys))
    }
}

impl<K: Kernel + KernelProperties> KernelDensity<K> {
    /// Evaluate `npoints` evenly spaced points covering the sample.
    ///
    /// The range extends past the smallest and largest observation by the
    /// kernel's reach: one bandwidth for compact kernels, three otherwise.
    ///
    /// Fails only when the padded range overflows `f64`.
    pub fn sweep(&self, npoints: usize) -> Result<(Vec<f64>, Vec<f64>)> {
        let padding = self.kernel.support().unwrap_or(UNBOUNDED_SWEEP_PADDING) * self.bandwidth;
        // A fitted model never holds an empty sample
        let (lo, hi) = min_max(&self.sample).unwrap_or((0.0, 0.0));
        self.sweep_range(lo - padding, hi + padding, npoints)
    }
}

fn check_not_empty<T, U>(sample: &[T], points: &[U]) -> Result<()> {
    if sample.is_empty() {
        warn!("Empty sample: no density can be estimated");
        return Err(Error::EmptySample);
    }
    if points.is_empty() {
        warn!("Empty evaluation set: nothing to evaluate");
        return Err(Error::EmptyEvaluationSet);
    }
    Ok(())
}

/// `1 / (n·h)`, rejected when it overflows
fn normalization(n: usize, h: f64) -> Result<f64> {
    let norm = 1.0 / (n as f64 * h);
    if norm.is_finite() {
        Ok(norm)
    } else {
        Err(Error::InvalidBandwidth { value: h })
    }
}

fn finite_values<T: Numeric>(values: &[T], context: &str) -> Result<Vec<f64>> {
    if !all_finite(values) {
        return Err(Error::non_finite(context));
    }
    Ok(widen(values))
}

#[inline]
fn density_at<K: Kernel + ?Sized>(sample: &[f64], x: f64, h: f64, norm: f64, kernel: &K) -> f64 {
    let sum = sample
        .iter()
        .fold(0.0, |acc, &xi| acc + kernel.evaluate((x - xi) / h));
    norm * sum
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all<K: Kernel + ?Sized>(
    sample: &[f64],
    xs: &[f64],
    h: f64,
    norm: f64,
    kernel: &K,
) -> Vec<f64> {
    xs.iter()
        .map(|&x| density_at(sample, x, h, norm, kernel))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_all<K: Kernel + ?Sized>(
    sample: &[f64],
    xs: &[f64],
    h: f64,
    norm: f64,
    kernel: &K,
) -> Vec<f64> {
    use rayon::prelude::*;

    xs.par_iter()
        .map(|&x| density_at(sample, x, h, norm, kernel))
        .collect()
}
