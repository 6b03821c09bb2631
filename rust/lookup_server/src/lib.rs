// src/lib.rs

pub mod config;
pub mod handlers;
pub mod models;

use config::ServerConfig;
use std::io;
use stock_query::ProviderClient;

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    use actix_web::middleware::Logger;
    use actix_web::{web, App, HttpServer};
    use handlers::{health_check, lookup};

    let client = ProviderClient::new(config.provider)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    let client = web::Data::new(client);

    log::info!("Starting stock lookup server at http://{}", config.bind_addr);
    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .wrap(Logger::default())
            .service(lookup)
            .service(health_check)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
