//! # Codificación Gzip
//! src/http/encoding.rs
//!
//! Compresión gzip del body cuando el cliente la negocia vía
//! `Accept-Encoding`. Solo hay camino de compresión: el servidor nunca
//! recibe bodies comprimidos en este alcance.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Verifica si un valor de `Accept-Encoding` negocia gzip
///
/// La comparación es por substring, sin parsear la lista separada por
/// comas. Es una simplificación deliberada: `"gzip"`, `"gzip, br"` y
/// hasta `"x-gzip-like"` negocian gzip.
pub fn accepts_gzip(accept_encoding: &str) -> bool {
    accept_encoding.contains("gzip")
}

/// Comprime un payload en formato gzip (contenedor estándar, nivel default)
///
/// No se garantiza un output byte a byte reproducible entre versiones de
/// la librería; la garantía es que cualquier decodificador gzip recupera
/// el payload exacto.
///
/// # Ejemplo
///
/// ```
/// use http_file_server::http::encoding::gzip_encode;
///
/// let compressed = gzip_encode(b"hola").unwrap();
/// assert!(!compressed.is_empty());
/// ```
pub fn gzip_encode(payload: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload)?;
    encoder.finish()
}
