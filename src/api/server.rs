use super::handlers;
use crate::HEALTH_PATH;
use crate::PREDICT_PATH;
use crate::ROOT_PATH;
use crate::UI_PATH;
use crate::config::Config;
use crate::model::Model;
use crate::ui;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config, model: Model) -> Result<(), std::io::Error> {
        let model = web::Data::new(model);
        let variant = web::Data::new(config.ui);
        log::info!(
            "starting HTTP server on {}:{} ({} ui)",
            config.host,
            config.port,
            config.ui
        );
        let server = HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(model.clone())
                .app_data(variant.clone())
                .configure(routes)
        });
        let server = match config.workers {
            Some(n) => server.workers(n),
            None => server,
        };
        server.bind(config.addr())?.run().await
    }
}

/// Route table, shared by the server and the HTTP tests.
/// Expects `web::Data<Model>` and `web::Data<UiVariant>` registered on the app.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route(ROOT_PATH,    web::get().to(handlers::root))
       .route(HEALTH_PATH,  web::get().to(handlers::health))
       .route(PREDICT_PATH, web::post().to(handlers::predict))
       .service(
            web::resource(UI_PATH)
                .route(web::get().to(ui::handlers::show))
                .route(web::post().to(ui::handlers::submit)),
       );
}
