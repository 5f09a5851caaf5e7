//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración por argumentos CLI con fallback a variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http11_server --directory /tmp/files/ --port 4221
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 FILES_DIR=/srv/files LOG_LEVEL=debug ./http11_server
//! ```

use crate::error::ConfigError;
use clap::Parser;

/// Tamaño máximo aceptado para el buffer de lectura (1 MiB)
pub const MAX_BUFFER_SIZE: usize = 1024 * 1024;

/// Configuración del servidor HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "http11_server")]
#[command(about = "Servidor HTTP/1.1 mínimo: echo, user-agent y archivos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio donde se guardan/leen archivos de /files/*
    #[arg(long, default_value = "/tmp", env = "FILES_DIR")]
    pub directory: String,

    /// Bytes leídos del socket por cada request
    #[arg(long = "buffer-size", default_value = "1024", env = "READ_BUFFER_SIZE")]
    pub buffer_size: usize,

    /// Nivel de log (trace, debug, info, warn, error); RUST_LOG tiene prioridad
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
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
    /// use http11_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 || self.buffer_size > MAX_BUFFER_SIZE {
            return Err(ConfigError::InvalidBufferSize {
                got: self.buffer_size,
                max: MAX_BUFFER_SIZE,
            });
        }

        if self.directory.trim().is_empty() {
            return Err(ConfigError::EmptyDirectory);
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }

        Ok(())
    }

    /// Registra un resumen de la configuración efectiva
    pub fn print_summary(&self) {
        tracing::info!(
            address = %self.address(),
            directory = %self.directory,
            buffer_size = self.buffer_size,
            log_level = %self.log_level,
            "Configuration loaded"
        );
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 4221,
            host: "0.0.0.0".to_string(),
            directory: "/tmp".to_string(),
            buffer_size: 1024,
            log_level: "info".to_string(),
        }
    }
}
