//! Configuration for a density estimate

use crate::builder::KdeBuilder;
use density_bandwidth::Bandwidth;
use density_kernels::KernelKind;
use serde::{Deserialize, Serialize};

/// Kernel and bandwidth policy for an estimate
///
/// Both fields have defaults: a Gaussian kernel and Scott's rule. The kernel
/// type is generic so a closure can stand in for a catalog kernel; only
/// [`KernelKind`] configurations can be (de)serialized.
///
/// ```rust
/// use density_estimate::{Bandwidth, KdeConfig, KernelKind};
///
/// let config: KdeConfig = serde_json::from_str(r#"{"kernel": "epanechnikov"}"#).unwrap();
/// assert_eq!(config.kernel, KernelKind::Epanechnikov);
/// assert_eq!(config.bandwidth, Bandwidth::Scott);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "K: Deserialize<'de> + Default"))]
pub struct KdeConfig<K = KernelKind> {
    /// Smoothing kernel
    pub kernel: K,
    /// Bandwidth selection policy
    pub bandwidth: Bandwidth,
}

impl<K: Default> Default for KdeConfig<K> {
    fn default() -> Self {
        Self {
            kernel: K::default(),
            bandwidth: Bandwidth::default(),
        }
    }
}

impl KdeConfig<KernelKind> {
    /// Start a builder with the default Gaussian kernel and Scott's rule
    pub fn builder() -> KdeBuilder<KernelKind> {
        KdeBuilder::new()
    }
}

impl<K> KdeConfig<K> {
    /// Create a configuration from its parts
    pub fn new(kernel: K, bandwidth: Bandwidth) -> Self {
        Self { kernel, bandwidth }
    }

    /// Replace the kernel, keeping the bandwidth policy
    pub fn with_kernel<K2>(self, kernel: K2) -> KdeConfig<K2> {
        KdeConfig {
            kernel,
            bandwidth: self.bandwidth,
        }
    }

    /// Replace the bandwidth policy
    pub fn with_bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }
}
