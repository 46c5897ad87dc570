use std::collections::BTreeMap;

use ndarray::{Array, ArrayD, ArrayViewD, Dimension};
use num_traits::AsPrimitive;

use crate::{
    error::ShapeMismatchError,
    filter::MetricFilter,
    metric::{Metric, MetricValue},
};

/// Discrepancy statistics between an observed array and a modelled
/// reconstruction of it.
///
/// `ErrorMetrics` wraps a reference array and a same-shaped reconstruction,
/// typically the output of a lossy compression round trip, and derives the
/// metric catalog from their elementwise difference `modelled - observed`.
///
/// All state is fixed at construction and every accessor is a pure read, so
/// repeated queries always agree, values read earlier are never invalidated,
/// and a shared instance can be queried from multiple threads without
/// locking.
///
/// # Examples
///
/// ```
/// use fidelity_metrics::ErrorMetrics;
/// use ndarray::array;
///
/// let observed = array![0.0, 1.0, 2.0, 3.0];
/// let modelled = array![0.0, 1.0, 2.0, 7.0];
///
/// let metrics = ErrorMetrics::new(observed, modelled).unwrap();
///
/// assert_eq!(metrics.mean_error(), 1.0);
/// assert_eq!(metrics.mean_squared_error(), 4.0);
/// assert_eq!(metrics.max_absolute_error(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMetrics {
    observed: ArrayD<f64>,
    modelled: ArrayD<f64>,
    error: ArrayD<f64>,
}

impl ErrorMetrics {
    /// Creates metrics for an observed array and its modelled reconstruction.
    ///
    /// Accepts arrays of any dimensionality and any element type convertible
    /// to `f64`, so integer-typed datasets are coerced at this boundary. The
    /// elementwise error `modelled - observed` is computed once, up front.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeMismatchError`] if the two arrays differ in shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use fidelity_metrics::ErrorMetrics;
    /// use ndarray::Array1;
    ///
    /// let observed = Array1::from_iter(0..100i64);
    /// let modelled = Array1::from_iter(0..100i64);
    ///
    /// let metrics = ErrorMetrics::new(observed, modelled).unwrap();
    /// assert_eq!(metrics.mean_error(), 0.0);
    /// ```
    pub fn new<T, D>(
        observed: Array<T, D>,
        modelled: Array<T, D>,
    ) -> Result<Self, ShapeMismatchError>
    where
        T: AsPrimitive<f64>,
        D: Dimension,
    {
        if observed.shape() != modelled.shape() {
            return Err(ShapeMismatchError {
                observed: observed.shape().to_vec(),
                modelled: modelled.shape().to_vec(),
            });
        }

        let observed = observed.mapv(AsPrimitive::as_).into_dyn();
        let modelled = modelled.mapv(AsPrimitive::as_).into_dyn();
        let error = &modelled - &observed;

        Ok(Self {
            observed,
            modelled,
            error,
        })
    }

    /// The reference array.
    #[must_use]
    pub fn observed(&self) -> ArrayViewD<'_, f64> {
        self.observed.view()
    }

    /// The reconstructed array.
    #[must_use]
    pub fn modelled(&self) -> ArrayViewD<'_, f64> {
        self.modelled.view()
    }

    /// Elementwise error, `modelled - observed`.
    #[must_use]
    pub fn error(&self) -> ArrayViewD<'_, f64> {
        self.error.view()
    }

    /// Elementwise absolute error.
    #[must_use]
    pub fn absolute_error(&self) -> ArrayD<f64> {
        self.error.mapv(f64::abs)
    }

    /// Elementwise squared error.
    #[must_use]
    pub fn squared_error(&self) -> ArrayD<f64> {
        self.error.mapv(|e| e * e)
    }

    /// Arithmetic mean of the elementwise error.
    ///
    /// Like every scalar aggregate, this is `NaN` for empty inputs.
    #[must_use]
    pub fn mean_error(&self) -> f64 {
        self.mean_of(|e| e)
    }

    /// Mean of the elementwise absolute error.
    #[must_use]
    pub fn mean_absolute_error(&self) -> f64 {
        self.mean_of(f64::abs)
    }

    /// Mean of the elementwise squared error.
    #[must_use]
    pub fn mean_squared_error(&self) -> f64 {
        self.mean_of(|e| e * e)
    }

    /// Square root of the mean squared error.
    #[must_use]
    pub fn root_mean_squared_error(&self) -> f64 {
        self.mean_squared_error().sqrt()
    }

    /// Largest elementwise absolute error.
    #[must_use]
    pub fn max_absolute_error(&self) -> f64 {
        self.error.iter().fold(f64::NAN, |max, &e| max.max(e.abs()))
    }

    /// Smallest elementwise absolute error.
    #[must_use]
    pub fn min_absolute_error(&self) -> f64 {
        self.error.iter().fold(f64::NAN, |min, &e| min.min(e.abs()))
    }

    /// The computed value of a single catalog entry.
    #[must_use]
    pub fn value(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::Error => MetricValue::Elementwise(self.error.clone()),
            Metric::AbsoluteError => MetricValue::Elementwise(self.absolute_error()),
            Metric::SquaredError => MetricValue::Elementwise(self.squared_error()),
            Metric::MeanError => MetricValue::Scalar(self.mean_error()),
            Metric::MeanAbsoluteError => MetricValue::Scalar(self.mean_absolute_error()),
            Metric::MeanSquaredError => MetricValue::Scalar(self.mean_squared_error()),
            Metric::RootMeanSquaredError => MetricValue::Scalar(self.root_mean_squared_error()),
            Metric::MaxAbsoluteError => MetricValue::Scalar(self.max_absolute_error()),
            Metric::MinAbsoluteError => MetricValue::Scalar(self.min_absolute_error()),
        }
    }

    /// Every catalog metric, keyed by [`Metric`].
    ///
    /// With the `serde-derive` feature enabled, serializing the returned map
    /// produces an object keyed by metric name.
    #[must_use]
    pub fn all_metrics(&self) -> BTreeMap<Metric, MetricValue> {
        self.metrics(&MetricFilter::new())
    }

    /// The catalog entries selected by `filter`, keyed by [`Metric`].
    ///
    /// The key set is fully determined by the filter. Filters can only hold
    /// catalog entries, so this never fails; name validation happens when a
    /// filter is built from strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use fidelity_metrics::{ErrorMetrics, Metric, MetricFilter};
    /// use ndarray::array;
    ///
    /// let metrics = ErrorMetrics::new(array![1.0, 2.0], array![1.5, 2.0]).unwrap();
    /// let filter = MetricFilter::new().include_names(["error", "squared_error"]).unwrap();
    ///
    /// let selected = metrics.metrics(&filter);
    /// assert_eq!(
    ///     selected.keys().copied().collect::<Vec<_>>(),
    ///     [Metric::Error, Metric::SquaredError],
    /// );
    /// ```
    #[must_use]
    pub fn metrics(&self, filter: &MetricFilter) -> BTreeMap<Metric, MetricValue> {
        Metric::ALL
            .into_iter()
            .filter(|&metric| filter.selects(metric))
            .map(|metric| (metric, self.value(metric)))
            .collect()
    }

    fn mean_of(&self, f: impl Fn(f64) -> f64) -> f64 {
        let sum: f64 = self.error.iter().map(|&e| f(e)).sum();
        sum / self.error.len() as f64
    }
}
