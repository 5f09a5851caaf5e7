//! # HTTP/1.1 Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero sobre `std::net`.
//! Atiende cinco rutas: `/`, `/echo/{texto}`, `/user-agent`,
//! `/files/{nombre}` (GET y POST) y 404 para el resto.
//!
//! ## Arquitectura
//!
//! ```text
//! bytes → Request::parse → Router::route → Handler → Response::to_bytes → bytes
//! ```
//!
//! - `http`: parser, serializer, códigos de estado y gzip
//! - `router`: tabla de rutas (primera coincidencia gana)
//! - `handlers`: lógica de cada ruta
//! - `storage`: lectura/escritura de archivos bajo un directorio raíz
//! - `server`: listener TCP y loop por conexión
//! - `config`, `logging`, `error`: configuración, tracing y errores
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http11_server::config::Config;
//! use http11_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod storage;
