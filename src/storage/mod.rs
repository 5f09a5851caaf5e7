//! # Storage de Archivos
//! src/storage/mod.rs
//!
//! Capacidad mínima de lectura/escritura que usan las rutas `/files/*`.
//! El router recibe un `Arc<dyn Storage>` al construirse; no hay estado
//! global con el directorio.
//!
//! No hay locks: un GET y un POST concurrentes sobre el mismo archivo no
//! tienen un orden garantizado.

pub mod fs;

pub use fs::DirStorage;

use std::path::PathBuf;
use thiserror::Error;

/// Errores del storage
///
/// Las rutas de archivos convierten cualquiera de ellos en 404; la
/// distinción existe para los logs.
#[derive(Debug, Error)]
pub enum StorageError {
    /// El archivo no existe
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Nombre vacío, absoluto o que intenta salir del directorio raíz
    #[error("invalid file name: {0:?}")]
    InvalidName(String),

    /// Cualquier otro fallo de I/O (permisos, disco lleno, ...)
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lectura y escritura de archivos por nombre relativo
pub trait Storage: Send + Sync {
    /// Lee el archivo completo
    fn read_file(&self, name: &str) -> Result<Vec<u8>, StorageError>;

    /// Crea o trunca el archivo y escribe `contents`
    fn write_file(&self, name: &str, contents: &[u8]) -> Result<(), StorageError>;
}
