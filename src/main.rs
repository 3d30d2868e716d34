use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::{self as aweb, Data};
use actix_web::{App, HttpServer};

use culturahub::config::Config;
use culturahub::services::{Provider, SupabaseProvider};
use culturahub::web::middleware::SecurityHeaders;
use culturahub::web::{AppState, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let provider =
        SupabaseProvider::new(&config.supabase_url, &config.supabase_anon_key)
            .map_err(|e| {
                log::error!("Failed to build provider client: {}", e);
                std::io::Error::other(e.to_string())
            })?;
    let provider: Arc<dyn Provider> = Arc::new(provider);

    let bind_addr = config.bind_addr.clone();
    let static_dir = config.static_dir.clone();
    let state = Data::new(AppState::new(config, provider));

    log::info!("Listening on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .configure(handlers::configure)
            .service(
                Files::new("/static", static_dir.clone()).prefer_utf8(true),
            )
            .default_service(aweb::to(handlers::public::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
