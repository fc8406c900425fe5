//! Model inputs.
//!
//! The model consumes eight numbers positionally. [`Feature`] names each
//! position and carries what the form needs to render it; [`FeatureVector`]
//! is the fixed-shape input handed to a [`crate::model::Predictor`].
mod feature;
mod vector;

pub use feature::*;
pub use vector::*;
