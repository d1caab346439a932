//! Mathematical properties every catalog kernel must satisfy

use approx::assert_abs_diff_eq;
use density_kernels::{Gaussian, Kernel, KernelKind, KernelProperties};
use proptest::prelude::*;
use statrs::distribution::{Continuous, Normal};

/// Midpoint-rule integral of a kernel over `[-half_width, half_width]`
fn integrate<K: Kernel>(kernel: &K, half_width: f64) -> f64 {
    const DX: f64 = 1e-3;
    let steps = (2.0 * half_width / DX).round() as usize;
    (0..steps)
        .map(|i| {
            let u = -half_width + (i as f64 + 0.5) * DX;
            kernel.evaluate(u) * DX
        })
        .sum()
}

#[test]
fn test_gaussian_matches_statrs_normal() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    for u in [-4.0, -2.5, -1.0, -0.1, 0.0, 0.3, 1.0, 2.0, 6.0] {
        assert_abs_diff_eq!(Gaussian.evaluate(u), normal.pdf(u), epsilon = 1e-14);
    }
}

#[test]
fn test_every_kernel_integrates_to_one() {
    for kind in KernelKind::ALL {
        // Logistic and Sigmoid tails decay like e^{-|u|}
        let half_width = kind.support().unwrap_or(50.0) + 1.0;
        let area = integrate(&kind, half_width);
        assert_abs_diff_eq!(area, 1.0, epsilon = 1e-3);
    }
}

#[test]
fn test_compact_kernels_vanish_outside_support() {
    for kind in KernelKind::ALL.into_iter().filter(|k| k.is_compact()) {
        for u in [1.0 + 1e-9, 1.5, 10.0, -1.0 - 1e-9, -3.0] {
            assert_eq!(kind.evaluate(u), 0.0, "{kind} at {u}");
        }
    }
}

#[test]
fn test_closure_is_interchangeable_with_catalog_kernel() {
    let custom = |u: f64| if u.abs() <= 1.0 { 0.75 * (1.0 - u * u) } else { 0.0 };
    for u in [-1.2, -1.0, -0.5, 0.0, 0.25, 0.9, 1.0, 2.0] {
        assert_eq!(custom.evaluate(u), KernelKind::Epanechnikov.evaluate(u));
    }
}

#[test]
fn test_fn_item_is_a_kernel() {
    fn flat(u: f64) -> f64 {
        if u.abs() <= 1.0 {
            0.5
        } else {
            0.0
        }
    }
    let kernels: Vec<&dyn Kernel> = vec![&flat, &KernelKind::Boxcar];
    assert_eq!(kernels[0].evaluate(0.2), kernels[1].evaluate(0.2));
}

#[test]
fn test_serde_names() {
    let json = serde_json::to_string(&KernelKind::Epanechnikov).unwrap();
    assert_eq!(json, "\"epanechnikov\"");

    let kind: KernelKind = serde_json::from_str("\"uniform\"").unwrap();
    assert_eq!(kind, KernelKind::Boxcar);

    let kind: KernelKind = serde_json::from_str("\"biweight\"").unwrap();
    assert_eq!(kind, KernelKind::Quartic);

    assert!(serde_json::from_str::<KernelKind>("\"parzen\"").is_err());
}

proptest! {
    #[test]
    fn prop_kernels_are_symmetric(u in -20.0f64..20.0) {
        for kind in KernelKind::ALL {
            let (left, right) = (kind.evaluate(-u), kind.evaluate(u));
            // Logistic sums e^u and e^-u in a different order for -u
            prop_assert!((left - right).abs() <= 1e-15 * right.abs().max(f64::MIN_POSITIVE));
        }
    }

    #[test]
    fn prop_kernels_are_non_negative(u in -1e3f64..1e3) {
        for kind in KernelKind::ALL {
            prop_assert!(kind.evaluate(u) >= 0.0);
        }
    }

    #[test]
    fn prop_kernels_peak_at_origin(u in -20.0f64..20.0) {
        for kind in KernelKind::ALL {
            prop_assert!(kind.evaluate(u) <= kind.evaluate(0.0));
        }
    }
}
