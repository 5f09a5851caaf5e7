//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Un thread por conexión. Cada thread lee, parsea, enruta y escribe en
//! loop hasta que el peer cierra o la lectura falla. Los threads solo
//! comparten el router (de solo lectura).

use crate::config::Config;
use crate::error::ServerError;
use crate::http::response::DEFAULT_VERSION;
use crate::http::{Request, Response, StatusCode};
use crate::router::Router;
use crate::storage::DirStorage;
use std::io::{ErrorKind, Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    config: Config,
    router: Arc<Router>,
}

impl Server {
    /// Crea el servidor con la tabla de rutas por defecto sobre
    /// `config.directory`
    pub fn new(config: Config) -> Self {
        let storage = Arc::new(DirStorage::new(&config.directory));
        let router = Router::with_default_routes(storage);
        Self::with_router(config, router)
    }

    /// Crea el servidor con un router arbitrario
    pub fn with_router(config: Config, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Valida la configuración, hace bind y atiende conexiones.
    /// Solo retorna si el bind falla o la configuración es inválida.
    pub fn run(&self) -> Result<(), ServerError> {
        self.config.validate()?;

        let address = self.config.address();
        let listener = TcpListener::bind(&address).map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;

        self.serve(listener)
    }

    /// Atiende conexiones de un listener ya creado
    pub fn serve(&self, listener: TcpListener) -> Result<(), ServerError> {
        let local_addr = listener.local_addr()?;
        tracing::info!(
            address = %local_addr,
            directory = %self.config.directory,
            "Listening (one thread per connection)"
        );

        for stream in listener.incoming() {
            let mut stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to accept connection");
                    continue;
                }
            };

            let peer_addr = stream
                .peer_addr()
                .map(|addr| addr.to_string())
                .unwrap_or_else(|_| "unknown".to_string());
            tracing::debug!(peer_addr = %peer_addr, "Connection accepted");

            let router = Arc::clone(&self.router);
            let buffer_size = self.config.buffer_size;

            thread::spawn(move || {
                let span = tracing::info_span!("connection", peer = %peer_addr);
                let _guard = span.enter();

                if let Err(e) = handle_connection(&mut stream, &router, buffer_size) {
                    tracing::warn!(error = %e, "Connection terminated");
                }
            });
        }

        Ok(())
    }
}

/// Loop de una conexión sobre cualquier stream de bytes
///
/// Retorna `Ok(())` cuando el peer cierra limpiamente y `Err` ante un
/// fallo de lectura o escritura. Los requests se atienden en orden.
pub fn handle_connection<S: Read + Write>(
    stream: &mut S,
    router: &Router,
    buffer_size: usize,
) -> std::io::Result<()> {
    let mut buffer = vec![0u8; buffer_size];

    loop {
        let bytes_read = match stream.read(&mut buffer) {
            Ok(0) => {
                tracing::debug!("Connection closed by peer");
                return Ok(());
            }
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        let start = Instant::now();
        let response = respond(&buffer[..bytes_read], router);

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        tracing::debug!(
            status = response.status().as_u16(),
            bytes_in = bytes_read,
            bytes_out = response.body().len(),
            latency_us = start.elapsed().as_micros() as u64,
            "Response sent"
        );
    }
}

/// Parsea y enruta un buffer. Un request inválido produce 400 sin body.
fn respond(buffer: &[u8], router: &Router) -> Response {
    match Request::parse(buffer) {
        Ok(request) => {
            let response = router.route(&request);
            let method = request.method().as_str();
            let path = request.target();
            let status = response.status();
            if status.is_server_error() {
                tracing::error!(method, path, status = status.as_u16(), "Request failed");
            } else if status.is_client_error() {
                tracing::warn!(method, path, status = status.as_u16(), "Request rejected");
            } else {
                tracing::info!(method, path, status = status.as_u16(), "Request handled");
            }
            response
        }
        Err(e) => {
            tracing::warn!(error = %e, "Bad request");
            Response::empty(DEFAULT_VERSION, StatusCode::BadRequest)
        }
    }
}
