//! # Handlers de Rutas
//!
//! Cada handler recibe el request parseado y la capacidad de storage, y
//! retorna una Response. Ninguno escribe directamente al socket.
//!
//! - **basic**: `/`, `/echo/*`, `/user-agent`, 404
//! - **files**: `/files/*` (GET y POST)

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;
