//! # Errores del Servidor
//! src/error.rs
//!
//! Errores de arranque y del loop de aceptación. Los errores de un request
//! (parseo, codec, storage) viven junto a su módulo y nunca llegan aquí.

use thiserror::Error;

/// Configuración inválida
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("buffer size must be between 1 and {max} bytes, got {got}")]
    InvalidBufferSize { got: usize, max: usize },

    #[error("files directory must not be empty")]
    EmptyDirectory,

    #[error("log level must not be empty")]
    EmptyLogLevel,
}

/// Errores fatales del servidor
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
