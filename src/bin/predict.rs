//! Offline Prediction Binary
//!
//! Scores one census block against a model artifact without starting the
//! server. Features not given on the command line take their defaults.

use anyhow::Context;
use clap::Parser;
use house_price::features::Feature;
use house_price::features::FeatureVector;
use house_price::gauge::Price;
use house_price::model::Model;
use house_price::model::Predictor;

#[derive(Debug, Parser)]
#[command(name = "predict", about = "Predict one house price from a model artifact")]
struct Args {
    /// JSON model artifact.
    #[arg(long, env = "MODEL_PATH", default_value = house_price::DEFAULT_MODEL_PATH)]
    model: std::path::PathBuf,
    #[arg(long = "med-inc")]
    med_inc: Option<f64>,
    #[arg(long = "house-age")]
    house_age: Option<f64>,
    #[arg(long = "ave-rooms")]
    ave_rooms: Option<f64>,
    #[arg(long = "ave-bedrms")]
    ave_bedrms: Option<f64>,
    #[arg(long)]
    population: Option<f64>,
    #[arg(long = "ave-occup")]
    ave_occup: Option<f64>,
    #[arg(long)]
    latitude: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    longitude: Option<f64>,
}

impl Args {
    fn features(&self) -> FeatureVector {
        let given = [
            self.med_inc,
            self.house_age,
            self.ave_rooms,
            self.ave_bedrms,
            self.population,
            self.ave_occup,
            self.latitude,
            self.longitude,
        ];
        FeatureVector::from(
            Feature::all().map(|f| given[f.index()].unwrap_or_else(|| f.default())),
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let model = Model::load(&args.model)
        .with_context(|| format!("load model artifact {}", args.model.display()))?;
    let x = args.features();
    let prediction = model.predict(&x);
    println!("model:      {}", model);
    println!("features:   {}", x);
    println!("prediction: {}", prediction);
    println!("price:      {}", Price::from(prediction));
    Ok(())
}
