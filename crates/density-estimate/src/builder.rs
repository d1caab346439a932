use crate::config::KdeConfig;
use density_bandwidth::{Bandwidth, BandwidthSelector};
use density_core::{Error, Result};
use density_kernels::{Kernel, KernelKind};

/// Builder for a validated [`KdeConfig`].
///
/// A bandwidth is either chosen by a rule or given explicitly. Setting both is
/// rejected at [`build`](Self::build) time rather than silently letting one
/// win.
///
/// ```rust
/// use density_estimate::{Bandwidth, KdeConfig, KernelKind};
///
/// let config = KdeConfig::builder()
///     .kernel(KernelKind::Triangular)
///     .bandwidth(1.5)
///     .build()
///     .unwrap();
/// assert_eq!(config.bandwidth, Bandwidth::Custom(1.5));
///
/// let conflicting = KdeConfig::builder()
///     .rule(Bandwidth::Silverman)
///     .bandwidth(1.5)
///     .build();
/// assert!(conflicting.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct KdeBuilder<K = KernelKind> {
    kernel: K,
    rule: Option<Bandwidth>,
    value: Option<f64>,
}

impl KdeBuilder<KernelKind> {
    /// Creates a builder for a Gaussian kernel with no bandwidth chosen yet.
    pub fn new() -> Self {
        Self {
            kernel: KernelKind::default(),
            rule: None,
            value: None,
        }
    }
}

impl Default for KdeBuilder<KernelKind> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel> KdeBuilder<K> {
    /// Sets the kernel. Any [`Kernel`], including a closure, is accepted.
    pub fn kernel<K2: Kernel>(self, kernel: K2) -> KdeBuilder<K2> {
        KdeBuilder {
            kernel,
            rule: self.rule,
            value: self.value,
        }
    }

    /// Sets the bandwidth policy.
    pub fn rule(mut self, rule: Bandwidth) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Sets an explicit bandwidth.
    pub fn bandwidth(mut self, h: f64) -> Self {
        self.value = Some(h);
        self
    }

    /// Validates the settings and produces the configuration.
    ///
    /// Without a rule or value the bandwidth defaults to Scott's rule. Explicit
    /// values are checked here so a bad one fails before any data is seen.
    pub fn build(self) -> Result<KdeConfig<K>> {
        let bandwidth = match (self.rule, self.value) {
            (Some(_), Some(_)) => return Err(Error::ConflictingBandwidth),
            (Some(rule), None) => rule,
            (None, Some(h)) => Bandwidth::Custom(h),
            (None, None) => Bandwidth::default(),
        };
        // Explicit values need no data to be checked
        if !bandwidth.is_rule() {
            bandwidth.select(&[])?;
        }

        Ok(KdeConfig::new(self.kernel, bandwidth))
    }
}
