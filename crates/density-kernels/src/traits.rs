//! Core traits for smoothing kernels

/// A smoothing kernel evaluated at the scaled distance `u = (x - xi) / h`
///
/// Kernels are pure functions of a single argument. Any closure or `fn`
/// item with the signature `Fn(f64) -> f64` is a kernel too, so callers can
/// pass their own weighting function wherever a catalog kernel is accepted:
///
/// ```rust
/// use density_kernels::{Epanechnikov, Kernel};
///
/// let parabolic = |u: f64| if u.abs() <= 1.0 { 0.75 * (1.0 - u * u) } else { 0.0 };
/// assert_eq!(parabolic.evaluate(0.5), Epanechnikov.evaluate(0.5));
/// ```
pub trait Kernel: Send + Sync {
    /// Weight assigned to a scaled distance `u`
    fn evaluate(&self, u: f64) -> f64;
}

impl<F> Kernel for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        self(u)
    }
}

/// Intrinsic properties of a named kernel
pub trait KernelProperties {
    /// Catalog name of this kernel
    fn name(&self) -> &'static str;

    /// Half-width of the kernel's support, or `None` when it is non-zero
    /// over the whole real line
    fn support(&self) -> Option<f64>;

    /// Whether the kernel vanishes outside a bounded interval
    fn is_compact(&self) -> bool {
        self.support().is_some()
    }
}
