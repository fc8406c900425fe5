use crate::Prediction;
use crate::features::FeatureVector;

/// A fitted regressor over the eight housing features.
pub trait Predictor {
    /// Model output for a single census block, in units of $100,000.
    fn predict(&self, x: &FeatureVector) -> Prediction;
    /// Structural checks run once after deserialization.
    /// Anything that passes must be safe to [`Predictor::predict`] on.
    fn validate(&self) -> Result<(), String>;
}
