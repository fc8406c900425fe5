//! House Price Server Binary
//!
//! Loads the model artifact and serves `/predict` and `/ui` from one process.

use anyhow::Context;
use clap::Parser;
use house_price::api::Server;
use house_price::config::Config;
use house_price::model::Model;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    house_price::log()?;
    let model = Model::load(&config.model)
        .with_context(|| format!("load model artifact {}", config.model.display()))?;
    Server::run(config, model).await.context("run HTTP server")
}
