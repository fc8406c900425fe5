//! California house price prediction service.
//!
//! A pre-trained regression model is loaded once at startup and served
//! behind a JSON endpoint and a browser form, both mounted in one
//! actix-web process.
//!
//! ## Submodules
//!
//! - [`features`] — the eight-element input vector and its named features
//! - [`model`] — artifact loading and the [`model::Predictor`] implementations
//! - [`gauge`] — currency formatting and the gauge dial
//! - [`ui`] — the interactive form at `/ui`
//! - [`api`] — HTTP routes and server wiring
pub mod features;
pub mod gauge;
pub mod model;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Raw model output, in units of $100,000.
pub type Prediction = f64;
/// Prediction scaled to dollars.
pub type Dollars = f64;

// ============================================================================
// MODEL SHAPE
// ============================================================================
/// Number of features the model consumes, positionally.
pub const N_FEATURES: usize = 8;
/// Multiplier from model output to dollars.
pub const PRICE_SCALE: Dollars = 100_000.;
/// Upper end of the gauge dial. The training target is capped at $500,001.
pub const GAUGE_MAX: Dollars = 500_000.;

// ============================================================================
// HTTP SURFACE
// ============================================================================
pub const ROOT_PATH: &str = "/";
pub const PREDICT_PATH: &str = "/predict";
pub const HEALTH_PATH: &str = "/health";
pub const UI_PATH: &str = "/ui";
/// Body of `GET /`.
pub const WELCOME: &str = const_format::concatcp!(
    "Welcome to the House Price Predictor API. Go to ",
    UI_PATH,
    " for the interface or POST to ",
    PREDICT_PATH,
    "."
);
/// Defaults reproduce the fixed bind address of the original deployment.
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_MODEL_PATH: &str = "house_model.json";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
