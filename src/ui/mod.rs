//! Interactive form at `/ui`.
//!
//! Server-rendered HTML: eight slider inputs posting back to the same path,
//! which re-renders the form with the prediction underneath. No scripts
//! beyond keeping each slider and its number box in sync.
mod form;
pub mod handlers;
mod page;
mod variant;

pub use form::*;
pub use page::*;
pub use variant::*;
