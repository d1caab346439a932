//! Sample statistics used by the bandwidth rules

use crate::error::{Error, Result};

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use density_core::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the sample standard deviation with Bessel's correction
///
/// The divisor is `n - 1`, so fewer than two observations is an error rather
/// than a division by zero.
///
/// # Examples
///
/// ```rust
/// use density_core::stats::std_dev;
///
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// assert!(std_dev(&[42.0]).is_err());
/// ```
pub fn std_dev(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: data.len(),
        });
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    Ok(variance.sqrt())
}

/// Return the `k`-th smallest value (0-based) by selection
///
/// The slice is partially reordered in place. No interpolation between
/// neighbouring order statistics is performed.
///
/// # Examples
///
/// ```rust
/// use density_core::stats::order_statistic;
///
/// let mut data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
/// assert_eq!(order_statistic(&mut data, 1).unwrap(), 2.0);
/// ```
pub fn order_statistic(data: &mut [f64], k: usize) -> Result<f64> {
    if k >= data.len() {
        return Err(Error::InvalidParameter(format!(
            "order statistic index {k} out of range for {} values",
            data.len()
        )));
    }
    let (_, kth, _) = data.select_nth_unstable_by(k, f64::total_cmp);
    Ok(*kth)
}

/// Smallest and largest value of a slice, or `None` when empty
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = data.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}
