//! # Módulo Server
//!
//! Servidor TCP concurrente: accept loop en el thread principal y un
//! thread por conexión aceptada.

pub mod tcp;

pub use tcp::Server;
