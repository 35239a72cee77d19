//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor HTTP con soporte
//! para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http_file_server --port 4221 --directory /tmp/files
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4221 SERVE_DIR=/tmp/files ./http_file_server
//! ```

use clap::Parser;
use std::path::Path;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "http_file_server")]
#[command(about = "Servidor HTTP/1.1 concurrente con rutas echo, user-agent y archivos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio desde el cual se sirven (GET) y al cual se escriben (POST)
    /// los archivos de las rutas /files/*. Si no se indica, esas rutas fallan.
    #[arg(long, env = "SERVE_DIR")]
    pub directory: Option<String>,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use http_file_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// El directorio servido, si se indicó, debe existir y ser un directorio.
    /// Esto replica el chequeo que se hace al arrancar: es preferible fallar
    /// en el startup que servir desde una ubicación indefinida.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(dir) = &self.directory {
            let path = Path::new(dir);
            if !path.exists() {
                return Err(format!("directory does not exist: {}", dir));
            }
            if !path.is_dir() {
                return Err(format!("not a directory: {}", dir));
            }
        }
        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("⚙️  Configuración:");
        println!("   Address:    {}", self.address());
        match &self.directory {
            Some(dir) => println!("   Directory:  {}", dir),
            None => println!("   Directory:  (no configurado, /files/* deshabilitado)"),
        }
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 4221,
            host: "127.0.0.1".to_string(),
            directory: None,
        }
    }
}
