use super::UiVariant;
use crate::Prediction;
use crate::UI_PATH;
use crate::features::Feature;
use crate::features::FeatureVector;
use crate::gauge::Gauge;
use crate::gauge::Price;

pub const TITLE: &str = "California House Price Predictor";
pub const DESCRIPTION: &str = "Enter the housing details to predict the price.";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 44rem; margin: 2rem auto; color: #212121; }
form { display: grid; grid-template-columns: 11rem 1fr 7rem; gap: .6rem 1rem; align-items: center; }
form button { grid-column: 1 / -1; padding: .6rem; font-size: 1rem; }
.output { margin-top: 1.5rem; }
.output input { font-size: 1.2rem; width: 100%; }
.price { font-size: 1.6rem; font-weight: bold; }
.error { color: #c62828; }
"#;

/// The form page, optionally with the outcome of a submission.
pub struct Page {
    variant: UiVariant,
    inputs: FeatureVector,
    outcome: Option<Result<Prediction, String>>,
}

impl Page {
    /// Blank form pre-filled with the feature defaults.
    pub fn blank(variant: UiVariant) -> Self {
        Self {
            variant,
            inputs: FeatureVector::default(),
            outcome: None,
        }
    }
    /// Form echoing the submitted inputs with their prediction.
    pub fn predicted(variant: UiVariant, inputs: FeatureVector, prediction: Prediction) -> Self {
        Self {
            variant,
            inputs,
            outcome: Some(Ok(prediction)),
        }
    }
    /// Form echoing the submitted inputs with the reason no price is shown.
    pub fn rejected(variant: UiVariant, inputs: FeatureVector, reason: String) -> Self {
        Self {
            variant,
            inputs,
            outcome: Some(Err(reason)),
        }
    }

    fn field(feature: Feature, value: f64) -> String {
        let (min, max, step) = feature.range();
        let name = feature.name();
        format!(
            r#"<label for="{name}">{label}</label>
<input type="range" min="{min}" max="{max}" step="{step}" value="{value}" oninput="this.form.{name}.value=this.value">
<input type="number" id="{name}" name="{name}" step="any" value="{value}">"#,
            label = feature.label(),
        )
    }

    fn output(&self) -> String {
        match self.outcome {
            None => String::new(),
            Some(Err(ref reason)) => format!(r#"<p class="error">{}</p>"#, reason),
            Some(Ok(prediction)) => match self.variant {
                UiVariant::Plain => format!(
                    r#"<label for="output">Output</label>
<input type="text" id="output" name="output" readonly value="{}">"#,
                    prediction
                ),
                UiVariant::Gauge => {
                    let price = Price::from(prediction);
                    format!(
                        r#"<label for="output">Output</label>
<input type="text" id="output" name="output" readonly value="{}">
<p class="price">Predicted price: {}</p>
{}"#,
                        prediction,
                        price,
                        Gauge::from(price).svg()
                    )
                }
            },
        }
    }

    pub fn render(&self) -> String {
        let fields = self
            .inputs
            .iter()
            .map(|(feature, value)| Self::field(feature, value))
            .collect::<Vec<String>>()
            .join("\n");
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>{TITLE}</h1>
<p>{DESCRIPTION}</p>
<form method="post" action="{UI_PATH}">
{fields}
<button type="submit">Submit</button>
</form>
<div class="output">
{output}
</div>
</body>
</html>
"#,
            output = self.output(),
        )
    }
}
