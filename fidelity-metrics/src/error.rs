use thiserror::Error;

/// Error returned when the observed and modelled arrays differ in shape.
///
/// This error occurs at construction time and carries both shapes.
/// No [`ErrorMetrics`](crate::ErrorMetrics) instance exists after it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("observed shape {observed:?} does not match modelled shape {modelled:?}")]
pub struct ShapeMismatchError {
    /// The shape of the observed array.
    pub observed: Vec<usize>,
    /// The shape of the modelled array.
    pub modelled: Vec<usize>,
}

/// Error returned when a name does not match any metric in the catalog.
///
/// Produced by the string-based [`MetricFilter`](crate::MetricFilter)
/// builders and by parsing a [`Metric`](crate::Metric) from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric name `{name}`")]
pub struct UnknownMetricError {
    /// The name that failed to resolve.
    pub name: String,
}
