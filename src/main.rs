//! # HTTP Server - Entry Point
//! src/main.rs
//!
//! Lee la configuración (CLI + entorno), inicializa el logging y arranca
//! el servidor.

use http11_server::config::Config;
use http11_server::logging;
use http11_server::server::Server;

fn main() {
    let config = Config::new();
    logging::init(&config.log_level);

    tracing::info!("http11_server v{} starting", env!("CARGO_PKG_VERSION"));
    config.print_summary();

    let server = Server::new(config);

    // Bloquea el thread principal mientras acepta conexiones
    if let Err(e) = server.run() {
        tracing::error!(error = %e, "Fatal error");
        std::process::exit(1);
    }
}
