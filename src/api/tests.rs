use super::*;
use crate::features::FeatureVector;
use crate::gauge::Price;
use crate::model::Linear;
use crate::model::Model;
use crate::model::Predictor;
use crate::ui::UiVariant;
use actix_web::App;
use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::web;

/// Half the median income plus a half: easy to check by hand.
fn model() -> Model {
    Model::try_from(Linear {
        intercept: 0.5,
        coefficients: vec![0.5, 0., 0., 0., 0., 0., 0., 0.],
        scaler: None,
    })
    .unwrap()
}

/// Income plus bedrooms: two large but finite inputs overflow to infinity.
fn overflowing() -> Model {
    Model::try_from(Linear {
        intercept: 0.,
        coefficients: vec![1., 0., 0., 1., 0., 0., 0., 0.],
        scaler: None,
    })
    .unwrap()
}

macro_rules! app {
    ($variant:expr) => {
        app!($variant, model())
    };
    ($variant:expr, $model:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($model))
                .app_data(web::Data::new($variant))
                .configure(routes),
        )
        .await
    };
}

#[actix_web::test]
async fn root_welcomes() {
    let app = app!(UiVariant::Gauge);
    let req = test::TestRequest::get().uri("/").to_request();
    let body: Welcome = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body.message,
        "Welcome to the House Price Predictor API. Go to /ui for the interface or POST to /predict."
    );
}

#[actix_web::test]
async fn health_is_ok() {
    let app = app!(UiVariant::Gauge);
    let req = test::TestRequest::get().uri("/health").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(test::read_body(res).await, "ok");
}

#[actix_web::test]
async fn predicts_the_default_block() {
    let app = app!(UiVariant::Gauge);
    let expected = model().predict(&FeatureVector::default());
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(serde_json::json!({
            "data": [8.3252, 41.0, 6.98, 1.02, 322, 2.55, 37.88, -122.23]
        }))
        .to_request();
    let body: PredictResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.prediction, expected);
    assert!((body.prediction - 4.6626).abs() < 1e-12);
}

#[actix_web::test]
async fn omitted_data_falls_back_to_default() {
    let app = app!(UiVariant::Gauge);
    let expected = model().predict(&FeatureVector::default());
    for payload in ["", "{}"] {
        let req = test::TestRequest::post()
            .uri("/predict")
            .insert_header(("content-type", "application/json"))
            .set_payload(payload)
            .to_request();
        let body: PredictResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.prediction, expected, "{:?}", payload);
    }
}

#[actix_web::test]
async fn wrong_length_is_rejected() {
    let app = app!(UiVariant::Gauge);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(serde_json::json!({ "data": [8.3252, 41.0, 6.98, 1.02, 322, 2.55, 37.88] }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        test::read_body(res).await,
        "invalid data: expected 8 features, found 7"
    );
}

#[actix_web::test]
async fn non_finite_prediction_is_a_server_error() {
    let app = app!(UiVariant::Gauge, overflowing());
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(serde_json::json!({
            "data": [1.7e308, 0, 0, 1.7e308, 0, 0, 37.88, -122.23]
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(res).await;
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.starts_with("model produced a non-finite prediction"));
    assert!(!text.contains("null"));
}

#[actix_web::test]
async fn malformed_json_is_rejected() {
    let app = app!(UiVariant::Gauge);
    let req = test::TestRequest::post()
        .uri("/predict")
        .set_payload(r#"{"data": [1, 2,"#)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn ui_renders_the_form() {
    let app = app!(UiVariant::Gauge);
    let req = test::TestRequest::get().uri("/ui").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = test::read_body(res).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("California House Price Predictor"));
    assert!(html.contains(r#"name="Latitude""#));
}

#[actix_web::test]
async fn gauge_ui_shows_scaled_currency() {
    let app = app!(UiVariant::Gauge);
    let req = test::TestRequest::post()
        .uri("/ui")
        .set_form([("MedInc", "6.0"), ("HouseAge", "20")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    // 0.5 + 0.5 * 6.0
    let price = Price::from(3.5).to_string();
    assert_eq!(price, "$350,000.00");
    assert!(html.contains(&format!("Predicted price: {}", price)));
    assert!(html.contains(r#"readonly value="3.5""#));
    assert!(html.contains("<svg"));
}

#[actix_web::test]
async fn plain_ui_shows_raw_number() {
    let app = app!(UiVariant::Plain);
    let req = test::TestRequest::post()
        .uri("/ui")
        .set_form([("MedInc", "6.0")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains(r#"readonly value="3.5""#));
    assert!(!html.contains("Predicted price"));
    assert!(!html.contains("<svg"));
}

#[actix_web::test]
async fn ui_rejects_non_numeric_fields() {
    let app = app!(UiVariant::Gauge);
    let req = test::TestRequest::post()
        .uri("/ui")
        .set_form([("AveOccup", "crowded")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(res).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Average Occupancy must be a number"));
}

#[actix_web::test]
async fn ui_keeps_valid_fields_when_rejecting() {
    let app = app!(UiVariant::Gauge);
    let req = test::TestRequest::post()
        .uri("/ui")
        .set_form([("MedInc", "2.75"), ("AveOccup", "crowded")])
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains(r#"name="MedInc" step="any" value="2.75""#));
}

#[actix_web::test]
async fn ui_never_shows_an_infinite_price() {
    let app = app!(UiVariant::Gauge, overflowing());
    let req = test::TestRequest::post()
        .uri("/ui")
        .set_form([("MedInc", "1.7e308"), ("AveBedrms", "1.7e308")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(res).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("The model could not price these inputs."));
    assert!(!html.contains(r#"readonly value="inf""#));
    assert!(!html.contains("$inf"));
    assert!(!html.contains("NaN"));
    assert!(!html.contains("<svg"));
}
