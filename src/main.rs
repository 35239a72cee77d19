//! # HTTP File Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Parsea la configuración desde CLI y
//! variables de entorno, la valida y arranca el servidor TCP.

use http_file_server::config::Config;
use http_file_server::server::Server;

fn main() {
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("❌ Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
