//! Evaluation grid construction

/// `num` evenly spaced points from `start` to `end`, both endpoints included
///
/// Point `i` is `start + i * (end - start) / (num - 1)`. An empty vector is
/// returned for `num == 0` and `[start]` for `num == 1`.
///
/// # Examples
///
/// ```rust
/// use density_core::grid::linspace;
///
/// let xs = linspace(-7.0, 11.0, 10);
/// assert_eq!(xs.len(), 10);
/// assert_eq!(xs[0], -7.0);
/// assert_eq!(xs[9], 11.0);
/// ```
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            (0..num).map(|i| start + step * i as f64).collect()
        }
    }
}
