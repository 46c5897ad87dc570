use std::collections::BTreeSet;

use crate::{error::UnknownMetricError, metric::Metric};

/// Selects which catalog entries a bulk query reports.
///
/// The default filter selects the full catalog. An include set restricts the
/// selection to its members; an exclude set removes its members from whatever
/// is selected. The two may be combined, and exclusion wins: a metric present
/// in both sets is not selected.
///
/// Filters hold typed [`Metric`] values, so a built filter can only name
/// catalog entries. The string-based builders validate their input and fail
/// with an [`UnknownMetricError`] on any unrecognized name.
///
/// # Examples
///
/// ```
/// use fidelity_metrics::{Metric, MetricFilter};
///
/// let filter = MetricFilter::new()
///     .with_include([Metric::Error, Metric::SquaredError])
///     .with_exclude([Metric::SquaredError]);
///
/// assert!(filter.selects(Metric::Error));
/// assert!(!filter.selects(Metric::SquaredError));
/// assert!(!filter.selects(Metric::MeanError));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricFilter {
    include: Option<BTreeSet<Metric>>,
    exclude: BTreeSet<Metric>,
}

impl MetricFilter {
    /// Creates a filter that selects every catalog entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to the given metrics.
    ///
    /// Calling this again replaces the previous include set.
    #[must_use]
    pub fn with_include(mut self, metrics: impl IntoIterator<Item = Metric>) -> Self {
        self.include = Some(metrics.into_iter().collect());
        self
    }

    /// Removes the given metrics from whatever the filter selects.
    ///
    /// Exclusions accumulate across calls and win over inclusion.
    #[must_use]
    pub fn with_exclude(mut self, metrics: impl IntoIterator<Item = Metric>) -> Self {
        self.exclude.extend(metrics);
        self
    }

    /// Restricts the filter to the named metrics.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownMetricError`] if any name is not in the catalog.
    /// The filter is unchanged in that case.
    pub fn include_names<I, S>(self, names: I) -> Result<Self, UnknownMetricError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let metrics = resolve_names(names)?;
        Ok(self.with_include(metrics))
    }

    /// Removes the named metrics from whatever the filter selects.
    ///
    /// # Errors
    ///
    /// Returns an [`UnknownMetricError`] if any name is not in the catalog.
    /// The filter is unchanged in that case.
    pub fn exclude_names<I, S>(self, names: I) -> Result<Self, UnknownMetricError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let metrics = resolve_names(names)?;
        Ok(self.with_exclude(metrics))
    }

    /// Whether a bulk query with this filter reports `metric`.
    #[must_use]
    pub fn selects(&self, metric: Metric) -> bool {
        let included = self
            .include
            .as_ref()
            .is_none_or(|set| set.contains(&metric));

        included && !self.exclude.contains(&metric)
    }
}

fn resolve_names<I, S>(names: I) -> Result<Vec<Metric>, UnknownMetricError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().parse())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_selects_everything() {
        let filter = MetricFilter::new();
        for metric in Metric::ALL {
            assert!(filter.selects(metric));
        }
    }

    #[test]
    fn include_restricts_selection() {
        let filter = MetricFilter::new().with_include([Metric::Error, Metric::MeanError]);

        assert!(filter.selects(Metric::Error));
        assert!(filter.selects(Metric::MeanError));
        assert!(!filter.selects(Metric::SquaredError));
    }

    #[test]
    fn exclude_removes_from_selection() {
        let filter = MetricFilter::new().with_exclude([Metric::Error]);

        assert!(!filter.selects(Metric::Error));
        assert!(filter.selects(Metric::MeanError));
    }

    #[test]
    fn exclude_wins_over_include() {
        let filter = MetricFilter::new()
            .with_include([Metric::Error, Metric::SquaredError])
            .with_exclude([Metric::Error]);

        assert!(!filter.selects(Metric::Error));
        assert!(filter.selects(Metric::SquaredError));
    }

    #[test]
    fn exclusions_accumulate() {
        let filter = MetricFilter::new()
            .with_exclude([Metric::Error])
            .with_exclude([Metric::SquaredError]);

        assert!(!filter.selects(Metric::Error));
        assert!(!filter.selects(Metric::SquaredError));
        assert!(filter.selects(Metric::AbsoluteError));
    }

    #[test]
    fn include_names_resolves_valid_names() {
        let filter = MetricFilter::new()
            .include_names(["error", "squared_error"])
            .unwrap();

        assert!(filter.selects(Metric::Error));
        assert!(filter.selects(Metric::SquaredError));
        assert!(!filter.selects(Metric::MeanError));
    }

    #[test]
    fn include_names_rejects_unknown_name() {
        let err = MetricFilter::new()
            .include_names(["error", "totally_bogus"])
            .unwrap_err();

        assert_eq!(err.name, "totally_bogus");
    }

    #[test]
    fn exclude_names_rejects_unknown_name() {
        let err = MetricFilter::new()
            .exclude_names(["mean_eror"])
            .unwrap_err();

        assert_eq!(err.name, "mean_eror");
    }
}
