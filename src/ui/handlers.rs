use super::*;
use crate::model::Model;
use crate::model::Predictor;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::header::ContentType;
use actix_web::web;
use std::collections::HashMap;

pub async fn show(variant: web::Data<UiVariant>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(Page::blank(**variant).render())
}

pub async fn submit(
    model: web::Data<Model>,
    variant: web::Data<UiVariant>,
    form: web::Form<HashMap<String, String>>,
) -> impl Responder {
    match Submission::from(form.into_inner()).features() {
        Err(Rejection { inputs, reason }) => {
            log::warn!("rejected form submission: {}", reason);
            HttpResponse::BadRequest()
                .content_type(ContentType::html())
                .body(Page::rejected(**variant, inputs, reason).render())
        }
        Ok(x) => match model.predict(&x) {
            prediction if !prediction.is_finite() => {
                log::warn!("ui {} -> {} (not finite)", x, prediction);
                let reason = "The model could not price these inputs.".to_string();
                HttpResponse::InternalServerError()
                    .content_type(ContentType::html())
                    .body(Page::rejected(**variant, x, reason).render())
            }
            prediction => {
                log::debug!("ui {} -> {}", x, prediction);
                HttpResponse::Ok()
                    .content_type(ContentType::html())
                    .body(Page::predicted(**variant, x, prediction).render())
            }
        },
    }
}
