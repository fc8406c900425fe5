use super::Forest;
use super::Linear;
use super::Predictor;
use crate::Prediction;
use crate::features::FeatureVector;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Errors that can occur while loading a model artifact.
#[derive(Debug)]
pub enum ArtifactError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "unreadable artifact: {}", e),
            Self::Parse(e) => write!(f, "malformed artifact: {}", e),
            Self::Invalid(s) => write!(f, "invalid artifact: {}", s),
        }
    }
}

impl std::error::Error for ArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ArtifactError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<serde_json::Error> for ArtifactError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// The regressor family stored in an artifact, tagged by `"kind"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Kind {
    Linear(Linear),
    Forest(Forest),
}

/// A pre-trained model as stored on disk.
///
/// ```json
/// { "name": "ols", "kind": "linear", "intercept": -36.9, "coefficients": [..] }
/// ```
///
/// [`Model::load`], [`str::parse`] and the `TryFrom` conversions all validate.
/// The fields are public for serialization; a `Model` assembled by hand skips
/// that check and may panic in [`Predictor::predict`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: Kind,
}

impl Model {
    /// Read, parse and validate an artifact file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        log::info!("loading model from {}", path.display());
        let model = std::fs::read_to_string(path)?.parse::<Self>()?;
        log::info!("loaded {}", model);
        Ok(model)
    }
}

impl std::str::FromStr for Model {
    type Err = ArtifactError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let model = serde_json::from_str::<Self>(s)?;
        model.validate().map_err(ArtifactError::Invalid)?;
        Ok(model)
    }
}

impl TryFrom<Kind> for Model {
    type Error = ArtifactError;
    fn try_from(kind: Kind) -> Result<Self, Self::Error> {
        let model = Self { name: None, kind };
        model.validate().map_err(ArtifactError::Invalid)?;
        Ok(model)
    }
}
impl TryFrom<Linear> for Model {
    type Error = ArtifactError;
    fn try_from(linear: Linear) -> Result<Self, Self::Error> {
        Self::try_from(Kind::Linear(linear))
    }
}
impl TryFrom<Forest> for Model {
    type Error = ArtifactError;
    fn try_from(forest: Forest) -> Result<Self, Self::Error> {
        Self::try_from(Kind::Forest(forest))
    }
}

impl Predictor for Model {
    fn predict(&self, x: &FeatureVector) -> Prediction {
        match self.kind {
            Kind::Linear(ref m) => m.predict(x),
            Kind::Forest(ref m) => m.predict(x),
        }
    }
    fn validate(&self) -> Result<(), String> {
        match self.kind {
            Kind::Linear(ref m) => m.validate(),
            Kind::Forest(ref m) => m.validate(),
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name.as_deref().unwrap_or("unnamed");
        match self.kind {
            Kind::Linear(ref m) => match m.scaler {
                Some(_) => write!(f, "{} (standardized linear)", name),
                None => write!(f, "{} (linear)", name),
            },
            Kind::Forest(ref m) => write!(
                f,
                "{} ({} trees, {} nodes)",
                name,
                m.trees.len(),
                m.trees.iter().map(|t| t.nodes.len()).sum::<usize>()
            ),
        }
    }
}
