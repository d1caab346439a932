//! Sample summary shared by the rule-of-thumb selectors

use density_core::{stats, Result};

/// Size and spread of a sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Number of observations
    pub n: usize,
    /// Bessel-corrected standard deviation
    pub std_dev: f64,
}

impl SampleSummary {
    /// Summarize a sample; at least two observations are required
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        Ok(Self {
            n: sample.len(),
            std_dev: stats::std_dev(sample)?,
        })
    }

    /// The `n^(-1/5)` factor common to Scott's and Silverman's rules
    pub fn rate(&self) -> f64 {
        (self.n as f64).powf(-0.2)
    }
}
