use super::*;
use crate::model::Model;
use crate::model::Predictor;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(Welcome::default())
}

/// The model is loaded before the server binds, so being up means being ready.
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn predict(model: web::Data<Model>, body: web::Bytes) -> impl Responder {
    match PredictRequest::try_from(body.as_ref()) {
        Err(e) => {
            log::warn!("rejected predict body: {}", e);
            HttpResponse::BadRequest().body(format!("invalid request body: {}", e))
        }
        Ok(request) => match request.features() {
            Err(e) => {
                log::warn!("rejected predict data: {}", e);
                HttpResponse::BadRequest().body(format!("invalid data: {}", e))
            }
            Ok(x) => match model.predict(&x) {
                prediction if !prediction.is_finite() => {
                    log::warn!("predict {} -> {} (not finite)", x, prediction);
                    HttpResponse::InternalServerError()
                        .body(format!("model produced a non-finite prediction: {}", prediction))
                }
                prediction => {
                    log::debug!("predict {} -> {}", x, prediction);
                    HttpResponse::Ok().json(PredictResponse { prediction })
                }
            },
        },
    }
}
