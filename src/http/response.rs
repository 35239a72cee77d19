//! # Construcción y Serialización de Respuestas HTTP
//! src/http/response.rs
//!
//! Este módulo proporciona una API para construir respuestas de forma
//! programática y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato en el wire
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 4\r\n
//! \r\n
//! hola\r\n
//! ```
//!
//! Dos detalles de framing de esta implementación:
//!
//! - Los headers se serializan **en orden de inserción**; sobrescribir un
//!   header existente conserva su posición.
//! - Cada chunk del body va seguido de `\r\n` en el wire, por lo que el
//!   body real excede en dos bytes por chunk al `Content-Length` declarado.
//!   Los chunks vacíos nunca se emiten.

use super::StatusCode;

/// Representa una respuesta HTTP completa, lista para serializar
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 201, 404)
    status: StatusCode,

    /// Headers en orden de inserción
    headers: Vec<(String, String)>,

    /// Chunks del body; cada uno es no-vacío
    chunks: Vec<Vec<u8>>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto, la respuesta no tiene headers ni body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            chunks: Vec::new(),
        }
    }

    /// Agrega un header a la respuesta (versión builder)
    ///
    /// Si el header ya existe, se sobrescribe su valor conservando la
    /// posición original.
    ///
    /// # Ejemplo
    /// ```
    /// use http_file_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/plain");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.set_header(name, value);
        self
    }

    /// Agrega o sobrescribe un header (versión mutable)
    pub fn set_header(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.headers.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.headers.push((name.to_string(), value.to_string()));
        }
    }

    /// Cambia el código de estado de la respuesta
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Agrega un chunk al body; los chunks vacíos se descartan
    ///
    /// # Ejemplo
    /// ```
    /// use http_file_server::http::{Response, StatusCode};
    ///
    /// let mut response = Response::new(StatusCode::Ok);
    /// response.add_chunk(b"hola".to_vec());
    /// response.add_chunk(Vec::new()); // descartado
    /// assert_eq!(response.chunks().len(), 1);
    /// ```
    pub fn add_chunk(&mut self, chunk: Vec<u8>) {
        if !chunk.is_empty() {
            self.chunks.push(chunk);
        }
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Genera el formato completo:
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers en orden de inserción: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Cada chunk del body seguido de `\r\n`
    ///
    /// La respuesta completa se materializa en memoria y se escribe de
    /// una sola vez; no hay flush parcial.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // 1. Status line
        let status_line = format!("HTTP/1.1 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        // 2. Headers
        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Chunks del body, cada uno con su \r\n de cierre
        for chunk in &self.chunks {
            result.extend_from_slice(chunk);
            result.extend_from_slice(b"\r\n");
        }

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Busca un header por nombre
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene los headers en orden de inserción
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene los chunks del body
    pub fn chunks(&self) -> &[Vec<u8>] {
        &self.chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.chunks().is_empty());
    }

    #[test]
    fn test_with_header() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_header("Content-Length", "4");

        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Length"), Some("4"));
    }

    #[test]
    fn test_set_header_overwrites_in_place() {
        let mut response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_header("Content-Length", "0");

        response.set_header("Content-Type", "application/octet-stream");

        // El valor cambia pero la posición se conserva
        assert_eq!(
            response.headers(),
            &[
                (
                    "Content-Type".to_string(),
                    "application/octet-stream".to_string()
                ),
                ("Content-Length".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_chunks_are_dropped() {
        let mut response = Response::new(StatusCode::Ok);
        response.add_chunk(Vec::new());
        response.add_chunk(b"data".to_vec());
        response.add_chunk(Vec::new());

        assert_eq!(response.chunks().len(), 1);
        assert_eq!(response.chunks()[0], b"data");
    }

    #[test]
    fn test_to_bytes_framing() {
        let mut response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_header("Content-Length", "4");
        response.add_chunk(b"hola".to_vec());

        let bytes = response.to_bytes();
        assert_eq!(
            bytes,
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 4\r\n\r\nhola\r\n"
        );
    }

    #[test]
    fn test_to_bytes_empty_body() {
        let response = Response::new(StatusCode::NotFound)
            .with_header("Content-Type", "text/plain");

        let bytes = response.to_bytes();
        assert_eq!(
            bytes,
            b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\n\r\n"
        );
    }

    #[test]
    fn test_to_bytes_trailing_crlf_after_binary_chunk() {
        // El \r\n de cierre también aplica a bodies binarios
        let mut response = Response::new(StatusCode::Ok);
        response.add_chunk(vec![0x00, 0x01, 0xFF]);

        let bytes = response.to_bytes();
        assert!(bytes.ends_with(&[0x00, 0x01, 0xFF, b'\r', b'\n']));
    }

    #[test]
    fn test_to_bytes_header_order_preserved() {
        let response = Response::new(StatusCode::Ok)
            .with_header("B-Header", "2")
            .with_header("A-Header", "1");

        let text = String::from_utf8(response.to_bytes()).unwrap();
        let b_pos = text.find("B-Header").unwrap();
        let a_pos = text.find("A-Header").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn test_created_status_line() {
        let response = Response::new(StatusCode::Created);
        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert!(text.starts_with("HTTP/1.1 201 Created\r\n"));
    }
}
