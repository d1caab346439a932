//! Name-to-kernel registry
//!
//! [`KernelKind`] selects a catalog kernel at runtime, e.g. from a config file
//! or a command-line flag, and dispatches to the matching unit struct.

use crate::catalog::{
    Boxcar, Cosine, Epanechnikov, Gaussian, Logistic, Quartic, Sigmoid, Triangular, Tricube,
    Triweight,
};
use crate::traits::{Kernel, KernelProperties};
use density_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Runtime selector over the kernel catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelKind {
    #[default]
    Gaussian,
    #[serde(alias = "uniform")]
    Boxcar,
    Triangular,
    Epanechnikov,
    #[serde(alias = "biweight")]
    Quartic,
    Triweight,
    Tricube,
    Cosine,
    Logistic,
    Sigmoid,
}

impl KernelKind {
    /// Every catalog kernel, in table order
    pub const ALL: [KernelKind; 10] = [
        KernelKind::Gaussian,
        KernelKind::Boxcar,
        KernelKind::Triangular,
        KernelKind::Epanechnikov,
        KernelKind::Quartic,
        KernelKind::Triweight,
        KernelKind::Tricube,
        KernelKind::Cosine,
        KernelKind::Logistic,
        KernelKind::Sigmoid,
    ];
}

impl Kernel for KernelKind {
    #[inline]
    fn evaluate(&self, u: f64) -> f64 {
        match self {
            Self::Gaussian => Gaussian.evaluate(u),
            Self::Boxcar => Boxcar.evaluate(u),
            Self::Triangular => Triangular.evaluate(u),
            Self::Epanechnikov => Epanechnikov.evaluate(u),
            Self::Quartic => Quartic.evaluate(u),
            Self::Triweight => Triweight.evaluate(u),
            Self::Tricube => Tricube.evaluate(u),
            Self::Cosine => Cosine.evaluate(u),
            Self::Logistic => Logistic.evaluate(u),
            Self::Sigmoid => Sigmoid.evaluate(u),
        }
    }
}

impl KernelProperties for KernelKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Gaussian => Gaussian.name(),
            Self::Boxcar => Boxcar.name(),
            Self::Triangular => Triangular.name(),
            Self::Epanechnikov => Epanechnikov.name(),
            Self::Quartic => Quartic.name(),
            Self::Triweight => Triweight.name(),
            Self::Tricube => Tricube.name(),
            Self::Cosine => Cosine.name(),
            Self::Logistic => Logistic.name(),
            Self::Sigmoid => Sigmoid.name(),
        }
    }

    fn support(&self) -> Option<f64> {
        match self {
            Self::Gaussian | Self::Logistic | Self::Sigmoid => None,
            _ => Some(1.0),
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "uniform" => return Ok(Self::Boxcar),
            "biweight" => return Ok(Self::Quartic),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::UnknownKernel(s.to_string()))
    }
}
