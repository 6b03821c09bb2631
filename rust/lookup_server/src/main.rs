// src/main.rs

use lookup_server::config::ServerConfig;
use lookup_server::run_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_server(config).await
}
