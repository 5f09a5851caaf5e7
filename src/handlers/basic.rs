//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - `/`: health check, 200 sin body
//! - `/echo/{texto}`: devuelve el texto, comprimido si el cliente acepta gzip
//! - `/user-agent`: refleja el header `User-Agent`
//! - fallback: 404 sin body

use crate::http::response::{CONTENT_ENCODING, CONTENT_TYPE};
use crate::http::{CodecError, ContentEncoding, Request, Response, StatusCode};
use crate::storage::Storage;

pub const ECHO_PREFIX: &str = "/echo/";
pub const USER_AGENT_PREFIX: &str = "/user-agent";

/// Handler para `/`
pub fn root_handler(req: &Request, _storage: &dyn Storage) -> Response {
    Response::empty(req.version(), StatusCode::Ok)
}

/// Handler para `/echo/{texto}`
///
/// Si el cliente negoció un encoding soportado el body se comprime y se
/// agrega `Content-Encoding`. Un fallo del codec afecta solo a este request.
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 3
///
/// abc
/// ```
pub fn echo_handler(req: &Request, _storage: &dyn Storage) -> Response {
    let text = req.target().strip_prefix(ECHO_PREFIX).unwrap_or_default();

    let Some(encoding) = req.preferred_encoding() else {
        return Response::text(req.version(), text.as_bytes());
    };

    encoded_text_response(req, encoding, encoding.encode(text.as_bytes()))
}

/// Arma la respuesta de texto a partir del resultado del codec.
/// Un error produce 500 sin body.
fn encoded_text_response(
    req: &Request,
    encoding: ContentEncoding,
    encoded: Result<Vec<u8>, CodecError>,
) -> Response {
    match encoded {
        Ok(compressed) => Response::new(req.version(), StatusCode::Ok)
            .with_header(CONTENT_TYPE, "text/plain")
            .with_header(CONTENT_ENCODING, encoding.as_str())
            .with_body(compressed),
        Err(e) => {
            tracing::error!(error = %e, path = req.target(), "echo compression failed");
            Response::empty(req.version(), StatusCode::InternalServerError)
        }
    }
}

/// Handler para `/user-agent`
///
/// El valor se devuelve tal cual, sin decodificar ni comprimir.
pub fn user_agent_handler(req: &Request, _storage: &dyn Storage) -> Response {
    let agent = req.user_agent().unwrap_or_default();
    Response::text(req.version(), agent.as_bytes())
}

/// Respuesta para rutas sin handler
pub fn not_found_handler(req: &Request, _storage: &dyn Storage) -> Response {
    Response::empty(req.version(), StatusCode::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DirStorage;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn parse(raw: &str) -> Request {
        Request::parse(raw.as_bytes()).unwrap()
    }

    fn storage() -> DirStorage {
        DirStorage::new(std::env::temp_dir())
    }

    #[test]
    fn test_root_handler() {
        let response = root_handler(&parse("GET / HTTP/1.1\r\n\r\n"), &storage());

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_echo_plain() {
        let response = echo_handler(&parse("GET /echo/hello HTTP/1.1\r\n\r\n"), &storage());

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("Content-Length"), Some("5"));
        assert_eq!(response.header("Content-Encoding"), None);
        assert_eq!(response.body(), b"hello");
    }

    #[test]
    fn test_echo_gzip() {
        let req = parse("GET /echo/hello HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n");
        let response = echo_handler(&req, &storage());

        assert_eq!(response.header("Content-Encoding"), Some("gzip"));
        assert_eq!(
            response.header("Content-Length"),
            Some(response.body().len().to_string().as_str())
        );

        let mut decoder = GzDecoder::new(response.body());
        let mut out = String::new();
        decoder.read_to_string(&mut out).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_echo_unsupported_encoding_stays_plain() {
        let req = parse("GET /echo/hello HTTP/1.1\r\nAccept-Encoding: invalid-encoding, br\r\n\r\n");
        let response = echo_handler(&req, &storage());

        assert_eq!(response.header("Content-Encoding"), None);
        assert_eq!(response.body(), b"hello");
    }

    #[test]
    fn test_echo_empty_suffix() {
        let response = echo_handler(&parse("GET /echo/ HTTP/1.1\r\n\r\n"), &storage());

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
    }

    #[test]
    fn test_codec_failure_is_internal_error() {
        let req = parse("GET /echo/hello HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n");
        let failure = CodecError::Compression {
            encoding: "gzip",
            source: std::io::Error::new(std::io::ErrorKind::Other, "encoder broke"),
        };

        let response = encoded_text_response(&req, ContentEncoding::Gzip, Err(failure));

        assert_eq!(
            response.to_bytes(),
            b"HTTP/1.1 500 Internal Server Error\r\n\r\n".to_vec()
        );
    }

    #[test]
    fn test_user_agent() {
        let req = parse("GET /user-agent HTTP/1.1\r\nUser-Agent: curl/8.1.2\r\n\r\n");
        let response = user_agent_handler(&req, &storage());

        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.body(), b"curl/8.1.2");
    }

    #[test]
    fn test_user_agent_ignores_gzip() {
        let req = parse("GET /user-agent HTTP/1.1\r\nUser-Agent: a%20b\r\nAccept-Encoding: gzip\r\n\r\n");
        let response = user_agent_handler(&req, &storage());

        assert_eq!(response.header("Content-Encoding"), None);
        assert_eq!(response.body(), b"a%20b");
    }

    #[test]
    fn test_user_agent_missing() {
        let response = user_agent_handler(&parse("GET /user-agent HTTP/1.1\r\n\r\n"), &storage());

        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.body().is_empty());
        assert!(response.header("Content-Length").is_none());
    }

    #[test]
    fn test_not_found() {
        let response = not_found_handler(&parse("GET /nope HTTP/1.1\r\n\r\n"), &storage());

        assert_eq!(response.to_bytes(), b"HTTP/1.1 404 Not Found\r\n\r\n".to_vec());
    }
}
