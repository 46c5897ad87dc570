//! Shared fixtures for the end-to-end tests: a synthetic climate-like field
//! and a tolerance-bounded stand-in for a lossy compression codec.

use ndarray::Array2;

/// Builds a smooth surface-temperature-like field over a `rows` x `cols` grid.
///
/// Values are in kelvin, varying sinusoidally in both directions so every
/// grid cell differs from its neighbors.
#[must_use]
pub fn synthetic_field(rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let lat = i as f64 / rows as f64;
        let lon = j as f64 / cols as f64;
        280.0
            + 15.0 * (std::f64::consts::TAU * lat).sin()
            + 5.0 * (std::f64::consts::TAU * lon).cos()
    })
}

/// Mimics a `compress`/`decompress` round trip through an
/// absolute-error-bounded lossy codec.
///
/// Quantizes each element to a uniform grid with spacing `2 * tolerance`, so
/// every reconstructed element lands within `tolerance` of its input.
///
/// # Panics
///
/// Panics if `tolerance` is not strictly positive.
#[must_use]
pub fn lossy_round_trip(data: &Array2<f64>, tolerance: f64) -> Array2<f64> {
    assert!(tolerance > 0.0, "tolerance must be strictly positive");

    let step = 2.0 * tolerance;
    data.mapv(|v| (v / step).round() * step)
}
