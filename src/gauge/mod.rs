//! Dollar presentation of a prediction.
//!
//! - [`Price`] — a prediction scaled to dollars, formatted as currency
//! - [`Gauge`] — a semicircular dial placing a price on a fixed scale
mod dial;
mod price;

pub use dial::*;
pub use price::*;
