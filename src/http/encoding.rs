//! # Content-Encoding
//! src/http/encoding.rs
//!
//! Negociación de `Accept-Encoding` y el único codec soportado: gzip.
//!
//! El cliente anuncia tokens separados por coma; el servidor se queda solo
//! con los que conoce y descarta el resto en silencio.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use thiserror::Error;

/// Encodings que el servidor sabe aplicar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
}

/// Error al comprimir un body
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{encoding} compression failed: {source}")]
    Compression {
        encoding: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl ContentEncoding {
    /// Conjunto de encodings soportados, en orden de preferencia
    pub const SUPPORTED: &'static [ContentEncoding] = &[ContentEncoding::Gzip];

    /// Reconoce un token de `Accept-Encoding` (ya recortado)
    ///
    /// # Ejemplo
    /// ```
    /// use http11_server::http::ContentEncoding;
    ///
    /// assert_eq!(ContentEncoding::from_token("gzip"), Some(ContentEncoding::Gzip));
    /// assert_eq!(ContentEncoding::from_token("br"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        Self::SUPPORTED
            .iter()
            .copied()
            .find(|encoding| encoding.as_str() == token)
    }

    /// Valor para el header `Content-Encoding`
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }

    /// Comprime `data` completo en memoria
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self {
            ContentEncoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(data).map_err(|source| self.failure(source))?;
                encoder.finish().map_err(|source| self.failure(source))
            }
        }
    }

    fn failure(&self, source: std::io::Error) -> CodecError {
        CodecError::Compression {
            encoding: self.as_str(),
            source,
        }
    }
}

/// Parsea el valor de `Accept-Encoding` y retorna los encodings soportados
/// en el orden en que los anunció el cliente, sin duplicados.
pub fn parse_accept_encoding(value: &str) -> Vec<ContentEncoding> {
    let mut accepted = Vec::new();

    for token in value.split(',').map(str::trim) {
        if let Some(encoding) = ContentEncoding::from_token(token) {
            if !accepted.contains(&encoding) {
                accepted.push(encoding);
            }
        }
    }

    accepted
}
