use ndarray::ArrayD;

/// The computed value of a single catalog entry.
///
/// Aggregate metrics carry a scalar; elementwise metrics carry an array with
/// the same shape as the inputs.
///
/// With the `serde-derive` feature enabled, a scalar serializes as a plain
/// number and an elementwise value serializes as a nested sequence, one level
/// of nesting per array dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// An aggregate statistic.
    Scalar(f64),
    /// An elementwise statistic with the same shape as the inputs.
    Elementwise(ArrayD<f64>),
}

impl MetricValue {
    /// Returns the scalar payload, or `None` for an elementwise value.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Elementwise(_) => None,
        }
    }

    /// Returns the array payload, or `None` for a scalar value.
    #[must_use]
    pub fn as_elementwise(&self) -> Option<&ArrayD<f64>> {
        match self {
            Self::Scalar(_) => None,
            Self::Elementwise(array) => Some(array),
        }
    }
}

#[cfg(feature = "serde-derive")]
impl serde::Serialize for MetricValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Scalar(value) => serializer.serialize_f64(*value),
            Self::Elementwise(array) => {
                serde::Serialize::serialize(&Nested(array.view()), serializer)
            }
        }
    }
}

/// A view serialized as nested sequences, recursing along the outer axis.
#[cfg(feature = "serde-derive")]
struct Nested<'a>(ndarray::ArrayViewD<'a, f64>);

#[cfg(feature = "serde-derive")]
impl serde::Serialize for Nested<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        if self.0.ndim() == 0 {
            let value = self
                .0
                .first()
                .copied()
                .expect("a zero-dimensional array holds exactly one element");
            return serializer.serialize_f64(value);
        }

        let outer = self.0.len_of(ndarray::Axis(0));
        let mut seq = serializer.serialize_seq(Some(outer))?;
        for sub in self.0.outer_iter() {
            seq.serialize_element(&Nested(sub))?;
        }
        seq.end()
    }
}
