//! # Storage en Disco
//! src/storage/fs.rs
//!
//! Implementación de [`Storage`] sobre un directorio raíz configurado.

use super::{Storage, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Storage respaldado por un directorio del sistema de archivos
#[derive(Debug, Clone)]
pub struct DirStorage {
    /// Directorio raíz; los nombres se resuelven relativos a él
    root: PathBuf,
}

impl DirStorage {
    /// Crea un storage sobre `root`. El directorio no se valida ni se crea
    /// aquí; los errores aparecen en la primera lectura o escritura.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resuelve `name` dentro del directorio raíz
    ///
    /// Rechaza nombres vacíos, absolutos o con componentes `..`.
    ///
    /// # Ejemplo
    /// ```
    /// use http11_server::storage::DirStorage;
    ///
    /// let storage = DirStorage::new("/tmp/data");
    /// assert!(storage.resolve("note.txt").is_ok());
    /// assert!(storage.resolve("../etc/passwd").is_err());
    /// ```
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(name);
        let mut has_file = false;

        for component in relative.components() {
            match component {
                Component::Normal(_) => has_file = true,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(StorageError::InvalidName(name.to_string()));
                }
            }
        }

        if !has_file {
            return Err(StorageError::InvalidName(name.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

impl Storage for DirStorage {
    fn read_file(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(name)?;

        fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StorageError::NotFound(path.clone()),
            _ => StorageError::Io {
                path: path.clone(),
                source,
            },
        })
    }

    fn write_file(&self, name: &str, contents: &[u8]) -> Result<(), StorageError> {
        let path = self.resolve(name)?;

        fs::write(&path, contents).map_err(|source| StorageError::Io { path, source })
    }
}
