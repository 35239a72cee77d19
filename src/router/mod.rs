//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo reconoce las cuatro rutas soportadas y genera la respuesta
//! de cada una.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Route::resolve → generate_response → Response
//! ```
//!
//! El matching es estructural sobre `(método, path)`: rutas literales por
//! igualdad exacta y rutas parametrizadas (`/echo/<resto>`, `/files/<resto>`)
//! por prefijo, con el resto capturado tal cual (puede ser vacío). Sin
//! handler para la combinación, la respuesta es 404.
//!
//! El generador es stateless entre requests: todo el estado vive dentro
//! de una llamada.

use crate::fs::{self, FileStore};
use crate::http::encoding;
use crate::http::{Method, Request, Response, StatusCode};
use std::io::{BufRead, Read};

/// Las variantes de ruta que el servidor reconoce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// GET /
    Root,

    /// GET /echo/<resto>, con el resto capturado sin decodificar
    Echo(String),

    /// GET /user-agent
    UserAgent,

    /// GET /files/<nombre>
    FilesGet(String),

    /// POST /files/<nombre>
    FilesPost(String),

    /// Cualquier otra combinación de método y path
    NotFound,
}

impl Route {
    /// Resuelve método y path a una variante de ruta (primer match gana)
    ///
    /// # Ejemplo
    /// ```
    /// use http_file_server::http::Method;
    /// use http_file_server::router::Route;
    ///
    /// assert_eq!(Route::resolve(&Method::GET, "/"), Route::Root);
    /// assert_eq!(
    ///     Route::resolve(&Method::GET, "/echo/hola"),
    ///     Route::Echo("hola".to_string())
    /// );
    /// assert_eq!(Route::resolve(&Method::POST, "/"), Route::NotFound);
    /// ```
    pub fn resolve(method: &Method, path: &str) -> Route {
        match method {
            Method::GET => {
                if path == "/" {
                    Route::Root
                } else if let Some(rest) = path.strip_prefix("/echo/") {
                    Route::Echo(rest.to_string())
                } else if path == "/user-agent" {
                    Route::UserAgent
                } else if let Some(rest) = path.strip_prefix("/files/") {
                    Route::FilesGet(rest.to_string())
                } else {
                    Route::NotFound
                }
            }
            Method::POST => {
                if let Some(rest) = path.strip_prefix("/files/") {
                    Route::FilesPost(rest.to_string())
                } else {
                    Route::NotFound
                }
            }
            Method::Other(_) => Route::NotFound,
        }
    }
}

/// Errores de los handlers que no se traducen a una respuesta HTTP
///
/// Se propagan hasta el connection handler, que los loguea y cierra la
/// conexión sin enviar respuesta.
#[derive(Debug)]
pub enum HandlerError {
    /// Se pidió /files/* pero el servidor arrancó sin --directory
    MissingDirectory,

    /// Error de I/O leyendo el body o tocando el filesystem
    Io(std::io::Error),
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::MissingDirectory => {
                write!(f, "no directory was provided at server start")
            }
            HandlerError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for HandlerError {}

impl From<std::io::Error> for HandlerError {
    fn from(e: std::io::Error) -> Self {
        HandlerError::Io(e)
    }
}

/// Despacha un request y construye la respuesta de la ruta que matchee
///
/// `body` es el mismo reader del que se leyeron los headers: el handler
/// de `POST /files/*` consume de ahí exactamente `Content-Length` bytes.
/// `store` es la capacidad de filesystem sobre el directorio servido
/// (`None` si el servidor arrancó sin directorio).
///
/// Los headers base van en toda respuesta: `Content-Type: text/plain` y,
/// si el request negocia gzip, `Content-Encoding: gzip` **antes** de
/// correr la lógica de ruta. Solo la ruta echo comprime realmente su
/// body; las demás conservan el header negociado sobre bytes sin
/// comprimir.
pub fn generate_response(
    request: &Request,
    body: &mut dyn BufRead,
    store: Option<&dyn FileStore>,
) -> Result<Response, HandlerError> {
    let gzip = encoding::accepts_gzip(request.header_or_empty("Accept-Encoding"));

    let mut response = Response::new(StatusCode::Ok).with_header("Content-Type", "text/plain");
    if gzip {
        response.set_header("Content-Encoding", "gzip");
    }

    match Route::resolve(request.method(), request.path()) {
        Route::Root => {}

        Route::Echo(rest) => {
            if gzip {
                // Content-Length refleja el tamaño comprimido, no el original
                let compressed = encoding::gzip_encode(rest.as_bytes())?;
                response.set_header("Content-Length", &compressed.len().to_string());
                response.add_chunk(compressed);
            } else {
                response.set_header("Content-Length", &rest.len().to_string());
                response.add_chunk(rest.into_bytes());
            }
        }

        Route::UserAgent => {
            let agent = request.header_or_empty("User-Agent");
            response.set_header("Content-Length", &agent.len().to_string());
            response.add_chunk(agent.as_bytes().to_vec());
        }

        Route::FilesGet(name) => {
            let store = store.ok_or(HandlerError::MissingDirectory)?;
            if fs::validate(store, &name).is_some() {
                let size = store.file_size(&name)?;
                let content = store.read_file(&name)?;
                response.set_header("Content-Length", &size.to_string());
                response.set_header("Content-Type", "application/octet-stream");
                response.add_chunk(content);
            } else {
                response.set_status(StatusCode::NotFound);
            }
        }

        Route::FilesPost(name) => {
            let store = store.ok_or(HandlerError::MissingDirectory)?;

            // Content-Length ausente o no numérico se trata como 0
            let declared = request
                .header_or_empty("Content-Length")
                .trim()
                .parse::<u64>()
                .unwrap_or(0);

            // Lectura incremental acotada por `take`: la memoria crece con
            // los bytes que realmente llegan, no con lo que el cliente
            // declare. Un Content-Length absurdo no puede tumbar el worker.
            let mut data = Vec::new();
            body.take(declared).read_to_end(&mut data)?;
            if (data.len() as u64) < declared {
                return Err(HandlerError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "request body shorter than declared Content-Length",
                )));
            }

            // La escritura no pasa por el validador: el nombre se une al
            // directorio tal cual llegó
            store.write_file(&name, &data)?;
            response.set_status(StatusCode::Created);
        }

        Route::NotFound => {
            response.set_status(StatusCode::NotFound);
        }
    }

    Ok(response)
}
