use crate::features::Feature;
use crate::features::FeatureVector;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Raw form fields keyed by [`Feature::name`], matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Submission(HashMap<String, String>);

impl From<HashMap<String, String>> for Submission {
    fn from(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }
}

/// A submission with at least one unusable field. `inputs` keeps every field
/// that did parse so the form can be re-rendered without losing them.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub inputs: FeatureVector,
    pub reason: String,
}

impl Submission {
    /// Blank or missing fields take the feature default; anything else must
    /// parse as a finite number. Keys that name no feature are ignored.
    pub fn features(&self) -> Result<FeatureVector, Rejection> {
        let fields = self
            .0
            .iter()
            .filter_map(|(k, v)| Feature::try_from(k.as_str()).ok().map(|f| (f, v.trim())))
            .collect::<BTreeMap<Feature, &str>>();
        let mut inputs = FeatureVector::default();
        let mut invalid = Vec::new();
        for (feature, s) in fields.into_iter().filter(|(_, s)| !s.is_empty()) {
            match s.parse::<f64>() {
                Ok(v) if v.is_finite() => inputs.set(feature, v),
                _ => invalid.push(format!("{} must be a number", feature.label())),
            }
        }
        match invalid.is_empty() {
            true => Ok(inputs),
            false => Err(Rejection {
                inputs,
                reason: invalid.join("; "),
            }),
        }
    }
}
