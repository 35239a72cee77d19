//! # Lectura y Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa un parser HTTP desde cero, en dos etapas:
//!
//! 1. `read_header_lines`: consume del stream la request line y los headers
//!    hasta la línea en blanco, sin tocar el body.
//! 2. `Request::from_lines`: convierte esas líneas en un request estructurado.
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/8.0\r\n
//! \r\n
//! ```
//!
//! El body (si lo hay) queda sin leer en el stream: el handler de
//! `POST /files/*` lo consume explícitamente según `Content-Length`.

use std::collections::HashMap;
use std::io::BufRead;

/// Métodos HTTP que el router reconoce
///
/// Un método desconocido no es un error de parsing: se conserva como
/// `Other` y el router lo resuelve como 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// Cualquier otro método (PUT, DELETE, ...) - siempre termina en 404
    Other(String),
}

impl Method {
    /// Parsea un método HTTP desde un string (nunca falla)
    fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(s) => s,
        }
    }
}

/// Errores que pueden ocurrir durante la lectura o el parsing
#[derive(Debug)]
pub enum ParseError {
    /// El stream se cerró antes de la línea en blanco que termina los headers
    UnexpectedEof,

    /// Formato inválido de la request line (menos de 3 tokens)
    InvalidRequestLine,

    /// Request vacío (ni siquiera hay request line)
    EmptyRequest,

    /// Error de I/O leyendo del stream
    Io(std::io::Error),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedEof => write!(f, "Stream closed before end of headers"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::Io(e) => write!(f, "I/O error reading request: {}", e),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Lee la request line y los headers desde el stream, línea por línea,
/// hasta encontrar la línea en blanco (`\r\n`) que los termina.
///
/// Retorna las líneas no vacías con el terminador ya removido. El cursor
/// del reader queda posicionado justo después de la línea en blanco, de
/// modo que el body (si existe) sigue disponible para el caller.
///
/// # Errores
///
/// * `ParseError::UnexpectedEof` - el cliente cerró antes de la línea en blanco
/// * `ParseError::Io` - error de I/O del socket
///
/// # Ejemplo
///
/// ```
/// use http_file_server::http::request::read_header_lines;
///
/// let raw: &[u8] = b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\nbody";
/// let mut reader = raw;
/// let lines = read_header_lines(&mut reader).unwrap();
///
/// assert_eq!(lines, vec!["GET / HTTP/1.1", "Host: localhost"]);
/// assert_eq!(reader, b"body"); // el body queda sin consumir
/// ```
pub fn read_header_lines<R: BufRead>(reader: &mut R) -> Result<Vec<String>, ParseError> {
    let mut lines = Vec::new();

    loop {
        let mut line = String::new();
        let bytes_read = reader.read_line(&mut line)?;

        if bytes_read == 0 {
            // EOF antes del terminador en blanco
            return Err(ParseError::UnexpectedEof);
        }

        // Remover el terminador (toleramos "\n" a secas)
        let trimmed = line.trim_end_matches('\n').trim_end_matches('\r');

        if trimmed.is_empty() {
            // Línea en blanco: fin de los headers, el body no se toca
            return Ok(lines);
        }

        lines.push(trimmed.to_string());
    }
}

/// Representa un request HTTP parseado (sin body)
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST u otro)
    method: Method,

    /// Path de la petición (ej: "/echo/hola"), sin decodificar
    path: String,

    /// Versión HTTP tal como llegó (se guarda pero no se valida)
    version: String,

    /// Headers HTTP con sus claves literales (ej: {"User-Agent": "curl/8.0"})
    headers: HashMap<String, String>,
}

impl Request {
    /// Construye un request a partir de las líneas de `read_header_lines`
    ///
    /// La primera línea debe tener al menos 3 tokens (método, path, versión);
    /// los tokens extra se ignoran. Las líneas de header se parten en la
    /// primera ocurrencia de `": "`; una línea sin ese separador se descarta.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_file_server::http::{Method, Request};
    ///
    /// let lines = vec![
    ///     "GET /user-agent HTTP/1.1".to_string(),
    ///     "User-Agent: curl/8.0".to_string(),
    /// ];
    /// let request = Request::from_lines(&lines).unwrap();
    ///
    /// assert_eq!(request.method(), &Method::GET);
    /// assert_eq!(request.path(), "/user-agent");
    /// assert_eq!(request.header("User-Agent"), Some("curl/8.0"));
    /// ```
    pub fn from_lines(lines: &[String]) -> Result<Self, ParseError> {
        let request_line = lines.first().ok_or(ParseError::EmptyRequest)?;

        let mut parts = request_line.split_whitespace();
        let (method, path, version) = match (parts.next(), parts.next(), parts.next()) {
            (Some(m), Some(p), Some(v)) => (m, p, v),
            _ => return Err(ParseError::InvalidRequestLine),
        };

        let mut headers = HashMap::new();
        for line in &lines[1..] {
            // Partir en la primera ": "; ambos lados van sin espacios extra
            if let Some((name, value)) = line.split_once(": ") {
                headers.insert(name.trim().to_string(), value.trim().to_string());
            }
            // Una línea sin ": " se descarta: ningún lookup la observaría
        }

        Ok(Request {
            method: Method::from_token(method),
            path: path.to_string(),
            version: version.to_string(),
            headers,
        })
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene un header específico por su clave literal
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene un header, o cadena vacía si no está presente
    pub fn header_or_empty(&self, name: &str) -> &str {
        self.header(name).unwrap_or("")
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}
