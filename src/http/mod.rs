//! # Módulo HTTP
//!
//! Este módulo implementa el protocolo HTTP/1.1 desde cero, sin usar
//! librerías de alto nivel. Incluye:
//!
//! - Lectura del bloque de headers desde el stream
//! - Parsing de requests
//! - Construcción y serialización de responses
//! - Manejo de status codes
//! - Codificación gzip para bodies negociados
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 4\r\n
//! \r\n
//! hola\r\n
//! ```
//!
//! Nota: cada chunk del body va seguido de `\r\n` en el wire; ver
//! `response` para el detalle de ese framing.

pub mod encoding; // Codificación gzip
pub mod request;  // Lectura y parsing de HTTP requests
pub mod response; // Construcción y serialización de HTTP responses
pub mod status;   // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
