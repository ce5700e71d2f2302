mod config;
mod error;
mod inference;
mod routes;
#[cfg(test)]
mod test_support;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::AppConfig;
use inference::InferenceClient;
use routes::{configure_routes, UploadLimits};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = AppConfig::load().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    let client = InferenceClient::new(&config.inference).map_err(|e| {
        log::error!("Failed to create inference client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    log::info!(
        "Inference endpoint: {} (timeout {}s)",
        client.predict_url(),
        config.inference.timeout_secs
    );
    if !client.has_credential() {
        log::warn!(
            "{} is not set. Analysis requests will fail until it is configured.",
            client.token_var()
        );
    }

    let limits = UploadLimits {
        max_bytes: config.max_upload_bytes,
    };
    let frontend_dir = config.frontend_dir.clone();
    if !frontend_dir.is_dir() {
        log::warn!(
            "Frontend directory {} does not exist. Run `trunk build` in frontend/.",
            frontend_dir.display()
        );
    }

    let bind_address = format!("0.0.0.0:{}", config.port);
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(limits))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
