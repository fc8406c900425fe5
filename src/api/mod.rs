//! HTTP surface.
//!
//! One actix-web server exposes the JSON prediction endpoint and mounts the
//! [`crate::ui`] form beside it. The model is shared read-only across
//! workers through [`actix_web::web::Data`].
//!
//! ## Routes
//!
//! - `GET  /` — welcome message
//! - `GET  /health` — liveness
//! - `POST /predict` — `{"data": [8 numbers]}` to `{"prediction": number}`
//! - `GET  /ui`, `POST /ui` — the interactive form
pub mod handlers;
mod request;
mod response;
mod server;

#[cfg(test)]
mod tests;

pub use request::*;
pub use response::*;
pub use server::*;
