//! Reconstruction-quality error metrics for lossy-compressed scientific data.

mod error;
mod error_metrics;
mod filter;
mod metric;

pub use error::{ShapeMismatchError, UnknownMetricError};
pub use error_metrics::ErrorMetrics;
pub use filter::MetricFilter;
pub use metric::{Metric, MetricValue};
