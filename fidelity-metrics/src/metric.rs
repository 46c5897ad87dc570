mod value;

use std::{fmt, str::FromStr};

use crate::error::UnknownMetricError;

pub use value::MetricValue;

/// A named statistic in the fixed metric catalog.
///
/// Every metric is a pure function of an observed/modelled array pair.
/// Elementwise metrics produce an array matching the input shape; the
/// remaining metrics aggregate the elementwise error to a single scalar.
///
/// Each metric has a stable string name, used for name-based filtering and
/// for serialization.
///
/// # Examples
///
/// ```
/// use fidelity_metrics::Metric;
///
/// assert_eq!(Metric::MeanSquaredError.name(), "mean_squared_error");
/// assert_eq!(Metric::from_name("error"), Some(Metric::Error));
/// assert!(Metric::from_name("not_a_metric").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// Elementwise error, `modelled - observed`.
    Error,
    /// Elementwise absolute error.
    AbsoluteError,
    /// Elementwise squared error.
    SquaredError,
    /// Arithmetic mean of the elementwise error.
    MeanError,
    /// Mean of the elementwise absolute error.
    MeanAbsoluteError,
    /// Mean of the elementwise squared error.
    MeanSquaredError,
    /// Square root of the mean squared error.
    RootMeanSquaredError,
    /// Largest elementwise absolute error.
    MaxAbsoluteError,
    /// Smallest elementwise absolute error.
    MinAbsoluteError,
}

impl Metric {
    /// Every catalog entry, in the order bulk queries report them.
    pub const ALL: [Self; 9] = [
        Self::Error,
        Self::AbsoluteError,
        Self::SquaredError,
        Self::MeanError,
        Self::MeanAbsoluteError,
        Self::MeanSquaredError,
        Self::RootMeanSquaredError,
        Self::MaxAbsoluteError,
        Self::MinAbsoluteError,
    ];

    /// The stable name of this metric.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::AbsoluteError => "absolute_error",
            Self::SquaredError => "squared_error",
            Self::MeanError => "mean_error",
            Self::MeanAbsoluteError => "mean_absolute_error",
            Self::MeanSquaredError => "mean_squared_error",
            Self::RootMeanSquaredError => "root_mean_squared_error",
            Self::MaxAbsoluteError => "max_absolute_error",
            Self::MinAbsoluteError => "min_absolute_error",
        }
    }

    /// Looks up a catalog entry by its stable name.
    ///
    /// Returns `None` if the name does not match any catalog entry.
    /// Use the [`FromStr`] implementation to get a typed error instead.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.name() == name)
    }

    /// Whether this metric produces an array matching the input shape.
    ///
    /// Metrics that are not elementwise aggregate to a single scalar.
    #[must_use]
    pub fn is_elementwise(self) -> bool {
        matches!(self, Self::Error | Self::AbsoluteError | Self::SquaredError)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = UnknownMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownMetricError {
            name: s.to_string(),
        })
    }
}

/// Serializes as the metric's stable name, so maps keyed by `Metric`
/// serialize to objects keyed by metric name.
#[cfg(feature = "serde-derive")]
impl serde::Serialize for Metric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_name(metric.name()), Some(metric));
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in Metric::ALL.into_iter().enumerate() {
            for b in &Metric::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn unknown_name_fails_to_parse() {
        let err = "mean_eror".parse::<Metric>().unwrap_err();
        assert_eq!(err.name, "mean_eror");
        assert!(Metric::from_name("mean_eror").is_none());
    }

    #[test]
    fn elementwise_metrics_are_classified() {
        let elementwise: Vec<_> = Metric::ALL
            .into_iter()
            .filter(|m| m.is_elementwise())
            .collect();

        assert_eq!(
            elementwise,
            [Metric::Error, Metric::AbsoluteError, Metric::SquaredError]
        );
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(
            Metric::RootMeanSquaredError.to_string(),
            "root_mean_squared_error"
        );
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&Metric::MaxAbsoluteError).unwrap();
        assert_eq!(json, "\"max_absolute_error\"");
    }
}
