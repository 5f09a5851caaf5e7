//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea el target del request a un handler.
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Las rutas se evalúan en el orden en que se registraron y gana la primera
//! que coincide. Si ninguna coincide, 404 sin body.

use crate::handlers;
use crate::http::{Request, Response};
use crate::storage::Storage;
use std::sync::Arc;

/// Tipo de función handler
///
/// Un handler recibe el Request y el storage y retorna una Response
pub type Handler = fn(&Request, &dyn Storage) -> Response;

/// Cómo se compara una ruta contra el target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// El target debe ser exactamente este string
    Exact(String),

    /// El target debe empezar con este string
    Prefix(String),
}

impl RoutePattern {
    pub fn matches(&self, target: &str) -> bool {
        match self {
            RoutePattern::Exact(path) => target == path,
            RoutePattern::Prefix(prefix) => target.starts_with(prefix.as_str()),
        }
    }
}

/// Router que mapea targets a handlers
pub struct Router {
    /// Tabla de rutas, en orden de evaluación
    routes: Vec<(RoutePattern, Handler)>,

    /// Storage compartido con los handlers de archivos
    storage: Arc<dyn Storage>,
}

impl Router {
    /// Crea un router vacío sobre `storage`
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            routes: Vec::new(),
            storage,
        }
    }

    /// Router con la tabla completa del servidor
    ///
    /// | Match                | Handler     |
    /// |----------------------|-------------|
    /// | `/`                  | root        |
    /// | prefijo `/echo/`     | echo        |
    /// | prefijo `/user-agent`| user-agent  |
    /// | prefijo `/files/`    | files       |
    ///
    /// # Ejemplo
    /// ```
    /// use std::sync::Arc;
    /// use http11_server::http::{Request, StatusCode};
    /// use http11_server::router::Router;
    /// use http11_server::storage::DirStorage;
    ///
    /// let router = Router::with_default_routes(Arc::new(DirStorage::new("/tmp")));
    /// let request = Request::parse(b"GET /echo/hi HTTP/1.1\r\n\r\n").unwrap();
    ///
    /// assert_eq!(router.route(&request).status(), StatusCode::Ok);
    /// ```
    pub fn with_default_routes(storage: Arc<dyn Storage>) -> Self {
        let mut router = Self::new(storage);
        router.register_exact("/", handlers::root_handler);
        router.register_prefix(handlers::ECHO_PREFIX, handlers::echo_handler);
        router.register_prefix(handlers::USER_AGENT_PREFIX, handlers::user_agent_handler);
        router.register_prefix(handlers::FILES_PREFIX, handlers::files_handler);
        router
    }

    /// Registra una ruta que debe coincidir exactamente
    pub fn register_exact(&mut self, path: &str, handler: Handler) {
        self.routes.push((RoutePattern::Exact(path.to_string()), handler));
    }

    /// Registra una ruta por prefijo
    pub fn register_prefix(&mut self, prefix: &str, handler: Handler) {
        self.routes.push((RoutePattern::Prefix(prefix.to_string()), handler));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    pub fn route(&self, request: &Request) -> Response {
        let target = request.target();

        let handler = self
            .routes
            .iter()
            .find(|(pattern, _)| pattern.matches(target))
            .map(|(_, handler)| *handler)
            .unwrap_or(handlers::not_found_handler);

        handler(request, self.storage.as_ref())
    }
}
