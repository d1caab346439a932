//! Common test utilities for density-estimate tests

#![allow(dead_code)]

use density_estimate::{linspace, Bandwidth, KernelKind};

/// The six-observation series behind every reference scenario
pub const SERIES: [f64; 6] = [6.2, 5.1, 1.9, -0.4, -1.3, -2.1];

/// Published reference values are rounded to six decimals
pub const REFERENCE_TOLERANCE: f64 = 1e-5;

/// Ten evenly spaced points: -7, -5, ..., 11
pub fn reference_grid() -> Vec<f64> {
    linspace(-7.0, 11.0, 10)
}

pub fn series_f32() -> Vec<f32> {
    SERIES.iter().map(|&x| x as f32).collect()
}

pub fn grid_f32() -> Vec<f32> {
    reference_grid().iter().map(|&x| x as f32).collect()
}

/// One published reference estimate
pub struct Scenario {
    pub kernel: KernelKind,
    pub bandwidth: Bandwidth,
    pub expected: [f64; 10],
}

/// Reference estimates of [`SERIES`] on [`reference_grid`]
pub fn scenarios() -> Vec<Scenario> {
    let custom = Bandwidth::Custom(2.25f64.sqrt());
    vec![
        Scenario {
            kernel: KernelKind::Gaussian,
            bandwidth: Bandwidth::Scott,
            expected: [
                0.007307, 0.028649, 0.065150, 0.090492, 0.087123, 0.074772, 0.066339, 0.048622,
                0.022996, 0.006330,
            ],
        },
        Scenario {
            kernel: KernelKind::Gaussian,
            bandwidth: Bandwidth::Silverman,
            expected: [
                0.003684, 0.023164, 0.068024, 0.100008, 0.088391, 0.071691, 0.069916, 0.051552,
                0.019584, 0.003428,
            ],
        },
        Scenario {
            kernel: KernelKind::Gaussian,
            bandwidth: custom,
            expected: [
                0.000249, 0.009358, 0.070429, 0.125095, 0.085787, 0.059328, 0.081730, 0.058461,
                0.009273, 0.000284,
            ],
        },
        Scenario {
            kernel: KernelKind::Boxcar,
            bandwidth: Bandwidth::Scott,
            expected: [
                0.0, 0.0, 0.065172, 0.097758, 0.097758, 0.065172, 0.065172, 0.065172, 0.0, 0.0,
            ],
        },
        Scenario {
            kernel: KernelKind::Boxcar,
            bandwidth: Bandwidth::Silverman,
            expected: [
                0.0, 0.0, 0.076758, 0.115137, 0.076758, 0.076758, 0.076758, 0.076758, 0.0, 0.0,
            ],
        },
        Scenario {
            kernel: KernelKind::Boxcar,
            bandwidth: custom,
            expected: [
                0.0, 0.0, 0.055556, 0.166667, 0.111111, 0.055556, 0.111111, 0.055556, 0.0, 0.0,
            ],
        },
        Scenario {
            kernel: KernelKind::Triangular,
            bandwidth: Bandwidth::Scott,
            expected: [
                0.0, 0.0, 0.064085, 0.144547, 0.078288, 0.048794, 0.097214, 0.061536, 0.0, 0.0,
            ],
        },
        Scenario {
            kernel: KernelKind::Triangular,
            bandwidth: Bandwidth::Silverman,
            expected: [
                0.0, 0.0, 0.061604, 0.159572, 0.072209, 0.040394, 0.107560, 0.058069, 0.0, 0.0,
            ],
        },
        Scenario {
            kernel: KernelKind::Triangular,
            bandwidth: custom,
            expected: [
                0.0, 0.0, 0.044444, 0.185185, 0.051852, 0.029630, 0.125926, 0.051852, 0.0, 0.0,
            ],
        },
    ]
}

/// Assert element-wise closeness with a message naming the failing index
pub fn assert_densities_close(actual: &[f64], expected: &[f64], tolerance: f64, label: &str) {
    assert_eq!(actual.len(), expected.len(), "{label}: length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "{label}: point {i} expected {e}, got {a}"
        );
    }
}
