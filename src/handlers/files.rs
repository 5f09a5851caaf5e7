//! # Transferencia de Archivos
//! src/handlers/files.rs
//!
//! `/files/{nombre}` sobre el [`Storage`] configurado:
//! - GET: 200 `application/octet-stream` con el contenido, o 404
//! - POST: escribe el body y responde 201, o 404 si la escritura falla
//! - otros métodos: 404
//!
//! Cualquier fallo del storage se expone como 404; la causa real queda en
//! el log.

use crate::http::response::CONTENT_TYPE;
use crate::http::{Method, Request, Response, StatusCode};
use crate::storage::Storage;

pub const FILES_PREFIX: &str = "/files/";

/// Handler para `/files/{nombre}`
pub fn files_handler(req: &Request, storage: &dyn Storage) -> Response {
    let name = req.target().strip_prefix(FILES_PREFIX).unwrap_or_default();

    match req.method() {
        Method::GET => read_file(req, storage, name),
        Method::POST => write_file(req, storage, name),
        other => {
            tracing::debug!(method = other.as_str(), file = name, "method not allowed on files route");
            Response::empty(req.version(), StatusCode::NotFound)
        }
    }
}

fn read_file(req: &Request, storage: &dyn Storage, name: &str) -> Response {
    match storage.read_file(name) {
        Ok(contents) => Response::new(req.version(), StatusCode::Ok)
            .with_header(CONTENT_TYPE, "application/octet-stream")
            .with_body(contents),
        Err(e) => {
            tracing::warn!(error = %e, file = name, "file read failed");
            Response::empty(req.version(), StatusCode::NotFound)
        }
    }
}

fn write_file(req: &Request, storage: &dyn Storage, name: &str) -> Response {
    match storage.write_file(name, req.body()) {
        Ok(()) => {
            tracing::debug!(file = name, bytes = req.body().len(), "file written");
            Response::empty(req.version(), StatusCode::Created)
        }
        Err(e) => {
            tracing::warn!(error = %e, file = name, "file write failed");
            Response::empty(req.version(), StatusCode::NotFound)
        }
    }
}
