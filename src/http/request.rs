//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser tolerante: solo la request line es obligatoria. Headers ausentes o
//! malformados dejan su campo vacío en vez de fallar.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/note.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/8.1.2\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! abc
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD TARGET VERSION`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: bytes crudos, solo se conservan en POST
//!
//! Se asume que el request completo llega en una sola lectura; no se usa
//! `Content-Length` para delimitar el body.

use super::encoding::{parse_accept_encoding, ContentEncoding};
use std::collections::HashMap;
use thiserror::Error;

const HEADER_SEPARATOR: &str = ": ";

/// Métodos HTTP reconocidos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// HEAD - Reconocido, pero ninguna ruta lo atiende de forma especial
    HEAD,

    /// POST - Enviar datos a un recurso
    POST,

    /// PUT - Reconocido; las rutas de archivos responden 404
    PUT,

    /// DELETE - Reconocido; las rutas de archivos responden 404
    DELETE,
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// # Errores
    ///
    /// Retorna error si el método no es reconocido
    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "GET" => Ok(Method::GET),
            "HEAD" => Ok(Method::HEAD),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP
    method: Method,

    /// Path de la petición (ej: "/echo/hola")
    target: String,

    /// Versión tal cual la envió el cliente (ej: "HTTP/1.1")
    version: String,

    /// Header `Host`, informativo
    host: Option<String>,

    /// Header `User-Agent`
    user_agent: Option<String>,

    /// Encodings soportados que anunció el cliente, en su orden
    accepted_encodings: Vec<ContentEncoding>,

    /// Body del request para métodos POST
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Request vacío
    #[error("Empty request")]
    EmptyRequest,

    /// La request line tiene menos de tres tokens (METHOD TARGET VERSION)
    #[error("Invalid request line: {0:?}")]
    InvalidRequestLine(String),

    /// Método HTTP no reconocido
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http11_server::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: curl/8.1.2\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.target(), "/echo/abc");
    /// assert_eq!(request.user_agent(), Some("curl/8.1.2"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let (head, body) = split_head(buffer);

        // Bytes no UTF-8 no deben tumbar el parse; se reemplazan por U+FFFD,
        // también en el target (un echo de `/echo/\xff` devuelve EF BF BD)
        let head = String::from_utf8_lossy(head);
        if head.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let mut lines = head.split("\r\n");

        // 1. Request line
        let request_line = lines.next().unwrap_or_default();
        let (method, target, version) = Self::parse_request_line(request_line)?;

        // 2. Headers
        let headers = Self::parse_headers(lines);
        let host = headers.get("Host").map(|v| v.to_string());
        let user_agent = headers.get("User-Agent").map(|v| v.to_string());
        let accepted_encodings = headers
            .get("Accept-Encoding")
            .map(|v| parse_accept_encoding(v))
            .unwrap_or_default();

        // 3. Body
        let body = if method == Method::POST {
            body.to_vec()
        } else {
            Vec::new()
        };

        Ok(Request {
            method,
            target,
            version,
            host,
            user_agent,
            accepted_encodings,
            body,
        })
    }

    /// Parsea la request line
    ///
    /// Formato: `GET /path HTTP/1.1`. Tokens extra después de la versión
    /// se ignoran.
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        // Al menos 3 partes: METHOD TARGET VERSION
        if parts.len() < 3 {
            return Err(ParseError::InvalidRequestLine(line.to_string()));
        }

        let method = Method::from_str(parts[0])?;
        Ok((method, parts[1].to_string(), parts[2].to_string()))
    }

    /// Tokeniza las líneas de headers en un mapa nombre → valor
    ///
    /// Se detiene en la primera línea vacía. Las líneas sin `": "` se ignoran.
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<&'a str, &'a str> {
        let mut headers = HashMap::new();

        for line in lines {
            if line.is_empty() {
                break;
            }

            if let Some((name, value)) = line.split_once(HEADER_SEPARATOR) {
                headers.insert(name, value.trim());
            }
        }

        headers
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> Method {
        self.method
    }

    /// Obtiene el target (path) del request
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene el header `Host`, si vino
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Obtiene el header `User-Agent`, si vino
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Encodings negociados, el primero es el preferido
    pub fn accepted_encodings(&self) -> &[ContentEncoding] {
        &self.accepted_encodings
    }

    /// Encoding a aplicar a la respuesta, si alguno
    pub fn preferred_encoding(&self) -> Option<ContentEncoding> {
        self.accepted_encodings.first().copied()
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Separa el bloque de headers del body en el primer `\r\n\r\n`.
/// Sin separador, todo el buffer es head.
fn split_head(buffer: &[u8]) -> (&[u8], &[u8]) {
    match buffer.windows(4).position(|w| w == b"\r\n\r\n") {
        Some(pos) => (&buffer[..pos], &buffer[pos + 4..]),
        None => (buffer, &[]),
    }
}
