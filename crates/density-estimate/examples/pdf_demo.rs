//! Print a few density estimates of a small series.
//!
//! Run with `RUST_LOG=debug` to see bandwidth selection.

use anyhow::Result;
use density_estimate::{estimate, linspace, Bandwidth, KdeConfig, KernelKind};
use tracing_subscriber::EnvFilter;

/// Format with six significant digits
fn significant(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).max(0) as usize;
    format!("{value:.decimals$}")
}

fn print_estimate(label: &str, density: &[f64]) {
    let values: Vec<String> = density.iter().map(|&d| significant(d)).collect();
    println!("{label}:\n  [{}]", values.join(", "));
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let series = [6.2, 5.1, 1.9, -0.4, -1.3, -2.1];
    let points = linspace(-7.0, 11.0, 10);

    let gaussian = KdeConfig::new(KernelKind::Gaussian, Bandwidth::Scott);
    print_estimate("gaussian / scott", &estimate(&series, &points, &gaussian)?);

    let triangular = KdeConfig::builder()
        .kernel(KernelKind::Triangular)
        .bandwidth(2.25f64.sqrt())
        .build()?;
    print_estimate("triangular / h = 1.5", &estimate(&series, &points, &triangular)?);

    // Any closure works as a kernel
    let epanechnikov = KdeConfig::builder()
        .kernel(|u: f64| if u.abs() <= 1.0 { 0.75 * (1.0 - u * u) } else { 0.0 })
        .rule(Bandwidth::Silverman)
        .build()?;
    print_estimate("epanechnikov closure / silverman", &estimate(&series, &points, &epanechnikov)?);

    Ok(())
}
