use crate::features::FeatureVector;
use crate::features::ShapeError;
use serde::Deserialize;

/// Body of `POST /predict`. Both an absent `data` and an empty body mean
/// "predict the default census block".
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub data: Option<Vec<f64>>,
}

impl PredictRequest {
    pub fn features(self) -> Result<FeatureVector, ShapeError> {
        match self.data {
            None => Ok(FeatureVector::default()),
            Some(data) => FeatureVector::try_from(data),
        }
    }
}

impl TryFrom<&[u8]> for PredictRequest {
    type Error = serde_json::Error;
    fn try_from(body: &[u8]) -> Result<Self, Self::Error> {
        match body.iter().all(u8::is_ascii_whitespace) {
            true => Ok(Self::default()),
            false => serde_json::from_slice(body),
        }
    }
}
