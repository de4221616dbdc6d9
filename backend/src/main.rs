mod config;
mod services;
mod store;

use crate::config::Config;
use crate::store::PersonaStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::io;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    let store = PersonaStore::new(&config.db);
    let init_store = store.clone();
    let seed = !config.no_seed;
    let registros = web::block(move || init_store.init(seed))
        .await
        .map_err(|e| io::Error::other(e.to_string()))?
        .map_err(|e| io::Error::other(e.to_string()))?;
    info!("{} personas en {}", registros, config.db.display());

    let base = config.base_path().to_string();
    info!(
        "Server running at http://{}:{}{}/",
        config.host, config.port, base
    );

    let store = web::Data::new(store);
    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(services::cors())
            .wrap(Logger::default())
            .service(services::plantilla::configure_routes(&base))
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
