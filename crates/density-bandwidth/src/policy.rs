//! Bandwidth policy as a configuration value

use crate::rules::{FixedBandwidth, ScottRule, SilvermanRule};
use crate::traits::BandwidthSelector;
use density_core::Result;
use serde::{Deserialize, Serialize};

/// How the bandwidth of an estimate is chosen
///
/// Serializes as `"scott"`, `"silverman"` or `{"custom": h}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bandwidth {
    /// Scott's rule of thumb
    #[default]
    Scott,
    /// Silverman's rule of thumb
    Silverman,
    /// Explicit bandwidth supplied by the caller
    Custom(f64),
}

impl Bandwidth {
    /// True for the data-driven rules, false for an explicit value
    pub fn is_rule(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl From<f64> for Bandwidth {
    fn from(h: f64) -> Self {
        Self::Custom(h)
    }
}

impl BandwidthSelector for Bandwidth {
    fn select(&self, sample: &[f64]) -> Result<f64> {
        match *self {
            Self::Scott => ScottRule.select(sample),
            Self::Silverman => SilvermanRule.select(sample),
            Self::Custom(h) => FixedBandwidth(h).select(sample),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Scott => ScottRule.name(),
            Self::Silverman => SilvermanRule.name(),
            Self::Custom(_) => "custom",
        }
    }
}
