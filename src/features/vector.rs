use super::Feature;
use crate::N_FEATURES;

/// A feature list of the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    pub expected: usize,
    pub found: usize,
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected {} features, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for ShapeError {}

/// Exactly eight features in model order.
///
/// This is the only input shape a [`crate::model::Predictor`] accepts, so
/// every call site has to go through [`TryFrom`] and deal with lists of the
/// wrong length before the model is ever touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; N_FEATURES]);

impl FeatureVector {
    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }
    pub fn set(&mut self, feature: Feature, value: f64) {
        self.0[feature.index()] = value;
    }
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
    /// (feature, value) pairs in model order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::all().into_iter().zip(self.0.iter().copied())
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self(Feature::all().map(|f| f.default()))
    }
}

impl From<[f64; N_FEATURES]> for FeatureVector {
    fn from(values: [f64; N_FEATURES]) -> Self {
        Self(values)
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = ShapeError;
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        <[f64; N_FEATURES]>::try_from(values)
            .map(Self)
            .map_err(|_| ShapeError {
                expected: N_FEATURES,
                found: values.len(),
            })
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = ShapeError;
    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

impl std::fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs = self
            .iter()
            .map(|(feature, value)| format!("{}={}", feature, value))
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "[{}]", pairs)
    }
}
