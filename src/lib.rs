//! # HTTP File Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero sobre sockets TCP,
//! sin frameworks: parsing manual del protocolo, respuestas ensambladas
//! a mano y un thread por conexión.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests, construcción y serialización de responses,
//!   y codificación gzip
//! - `fs`: Capacidad de filesystem (listar, leer, escribir) y validación
//!   de rutas dentro del directorio servido
//! - `router`: Despacho estructural de las cuatro rutas soportadas
//! - `server`: Servidor TCP concurrente y manejo de conexiones
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Rutas soportadas
//!
//! | Método | Ruta              | Comportamiento                          |
//! |--------|-------------------|------------------------------------------|
//! | GET    | `/`               | 200 sin body                             |
//! | GET    | `/echo/<texto>`   | Devuelve `<texto>` (gzip si se negocia)  |
//! | GET    | `/user-agent`     | Devuelve el header `User-Agent`          |
//! | GET    | `/files/<nombre>` | Sirve un archivo del directorio          |
//! | POST   | `/files/<nombre>` | Guarda el body como archivo              |
//!
//! Cualquier otra combinación responde `404 Not Found`.
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use http_file_server::config::Config;
//! use http_file_server::server::Server;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod fs;
pub mod http;
pub mod router;
pub mod server;
