use super::Predictor;
use crate::N_FEATURES;
use crate::Prediction;
use crate::features::Feature;
use crate::features::FeatureVector;
use serde::Deserialize;
use serde::Serialize;

/// Per-feature standardization applied before the coefficients,
/// `z = (x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Ordinary least squares fit: `intercept + Σ coefficients[i] * x[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<Scaler>,
}

impl Linear {
    fn standardize(&self, feature: Feature, x: f64) -> f64 {
        match self.scaler {
            None => x,
            Some(ref s) => (x - s.mean[feature.index()]) / s.scale[feature.index()],
        }
    }
}

impl Predictor for Linear {
    fn predict(&self, x: &FeatureVector) -> Prediction {
        x.iter()
            .map(|(feature, value)| self.standardize(feature, value))
            .zip(self.coefficients.iter())
            .map(|(z, w)| z * w)
            .sum::<f64>()
            + self.intercept
    }
    fn validate(&self) -> Result<(), String> {
        if !self.intercept.is_finite() {
            return Err("intercept is not finite".to_string());
        }
        if self.coefficients.len() != N_FEATURES {
            return Err(format!(
                "expected {} coefficients, found {}",
                N_FEATURES,
                self.coefficients.len()
            ));
        }
        if let Some(i) = self.coefficients.iter().position(|w| !w.is_finite()) {
            return Err(format!("coefficient for {} is not finite", Feature::from(i)));
        }
        match self.scaler {
            None => Ok(()),
            Some(ref s) if s.mean.len() != N_FEATURES || s.scale.len() != N_FEATURES => Err(
                format!("scaler must have {} means and {} scales", N_FEATURES, N_FEATURES),
            ),
            Some(ref s) if s.mean.iter().any(|m| !m.is_finite()) => {
                Err("scaler mean is not finite".to_string())
            }
            Some(ref s) if s.scale.iter().any(|d| !d.is_finite() || *d == 0.) => {
                Err("scaler scale must be finite and non-zero".to_string())
            }
            Some(_) => Ok(()),
        }
    }
}
