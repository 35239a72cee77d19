//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread, con I/O completamente síncrona: leer headers, leer el body
//! declarado si aplica, despachar la ruta y escribir la respuesta.
//!
//! Todos los errores son locales a la conexión: se loguean en el borde
//! del handler y la conexión se cierra sin respuesta. Un cliente que se
//! porta mal nunca afecta al accept loop ni a otras conexiones.

use crate::config::Config;
use crate::fs::{DiskStore, FileStore};
use crate::http::request::{read_header_lines, ParseError, Request};
use crate::router::{self, HandlerError};
use std::io::{BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Errores que se atrapan en el borde de una conexión
#[derive(Debug)]
pub enum ConnectionError {
    /// Request malformado: el cliente cerró temprano o la request line
    /// no parsea. Se cierra la conexión sin enviar respuesta.
    Parse(ParseError),

    /// Error de un handler (directorio ausente, I/O de filesystem o body)
    Handler(HandlerError),

    /// Error de I/O del socket
    Io(std::io::Error),
}

impl std::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionError::Parse(e) => write!(f, "parse error: {}", e),
            ConnectionError::Handler(e) => write!(f, "handler error: {}", e),
            ConnectionError::Io(e) => write!(f, "socket error: {}", e),
        }
    }
}

impl std::error::Error for ConnectionError {}

impl From<ParseError> for ConnectionError {
    fn from(e: ParseError) -> Self {
        ConnectionError::Parse(e)
    }
}

impl From<HandlerError> for ConnectionError {
    fn from(e: HandlerError) -> Self {
        ConnectionError::Handler(e)
    }
}

impl From<std::io::Error> for ConnectionError {
    fn from(e: std::io::Error) -> Self {
        ConnectionError::Io(e)
    }
}

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Arc<Config>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Arranca el accept loop (bloquea el thread actual)
    ///
    /// Cada conexión aceptada se procesa en su propio thread, sin límite
    /// de concurrencia. Los errores de accept se loguean y el loop sigue.
    pub fn run(&mut self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un thread por conexion\n");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let config = Arc::clone(&self.config);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!("   ✅ Nueva conexión desde: {} (spawning thread)", peer_addr);

                    thread::spawn(move || {
                        Self::handle_connection(stream, config);
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Procesa una conexión completa: un request, una respuesta, cerrar
    ///
    /// Este es el borde de aislamiento de errores: cualquier fallo se
    /// loguea aquí y la conexión se cierra sin respuesta (el socket se
    /// libera al salir del scope, en todos los caminos exactamente una
    /// vez).
    pub fn handle_connection(stream: TcpStream, config: Arc<Config>) {
        let peer_addr = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        if let Err(e) = Self::process(stream, &config) {
            eprintln!("   ❌ Error en conexión ({}): {}", peer_addr, e);
        }
    }

    /// Camino feliz del procesamiento de la conexión
    fn process(mut stream: TcpStream, config: &Config) -> Result<(), ConnectionError> {
        // Lectura bufferizada sobre un clon del socket; la escritura va
        // por el handle original. El body de un POST se lee del mismo
        // reader, que ya tiene el cursor después de los headers.
        let mut reader = BufReader::new(stream.try_clone()?);

        let lines = read_header_lines(&mut reader)?;
        let request = Request::from_lines(&lines)?;

        println!("Request: {} {}", request.method().as_str(), request.path());

        let store = config.directory.as_deref().map(DiskStore::new);
        let response = router::generate_response(
            &request,
            &mut reader,
            store.as_ref().map(|s| s as &dyn FileStore),
        )?;

        // La respuesta completa se materializa y se escribe de una vez
        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        Ok(())
    }
}
