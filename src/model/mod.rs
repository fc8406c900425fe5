//! Pre-trained regressors.
//!
//! The model is loaded once from a JSON artifact and never mutated, so it
//! can be shared across server workers without locking.
//!
//! ## Core Types
//!
//! - [`Predictor`] — anything that maps a [`crate::features::FeatureVector`] to a prediction
//! - [`Linear`] — fitted linear regression, optionally over standardized inputs
//! - [`Forest`] — ensemble of binary regression trees
//! - [`Model`] — the artifact as it sits on disk, validated on load
mod artifact;
mod forest;
mod linear;
mod predictor;

pub use artifact::*;
pub use forest::*;
pub use linear::*;
pub use predictor::*;
