//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero y habla con él
//! por TCP.

use flate2::read::GzDecoder;
use http11_server::config::Config;
use http11_server::server::Server;
use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Helper: levanta un servidor sobre `directory` y retorna su dirección
fn start_server(directory: &Path) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().unwrap();

    let mut config = Config::default();
    config.host = "127.0.0.1".to_string();
    config.port = addr.port();
    config.directory = directory.to_string_lossy().into_owned();

    thread::spawn(move || {
        let server = Server::new(config);
        server.serve(listener).expect("serve");
    });

    addr
}

/// Helper: directorio temporal limpio para un test
fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "http11_server_it_{}_{}",
        tag,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Helper: envía un request crudo en una conexión nueva y retorna la
/// response completa
fn send_raw(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.set_write_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(raw).unwrap();
    stream.flush().unwrap();
    stream.shutdown(Shutdown::Write).unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    response
}

/// Helper: separa head y body de una response
fn split_response(response: &[u8]) -> (String, Vec<u8>) {
    let pos = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("header terminator");
    (
        String::from_utf8_lossy(&response[..pos + 4]).into_owned(),
        response[pos + 4..].to_vec(),
    )
}

#[test]
fn test_root_endpoint() {
    let addr = start_server(&temp_dir("root"));
    let response = send_raw(addr, b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 200 OK\r\n\r\n".to_vec());
}

#[test]
fn test_echo_endpoint() {
    let addr = start_server(&temp_dir("echo"));
    let response = send_raw(addr, b"GET /echo/hello HTTP/1.1\r\n\r\n");

    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello".to_vec()
    );
}

#[test]
fn test_echo_gzip() {
    let addr = start_server(&temp_dir("gzip"));
    let response = send_raw(
        addr,
        b"GET /echo/hello HTTP/1.1\r\nAccept-Encoding: encoding-1, gzip, encoding-2\r\n\r\n",
    );
    let (head, body) = split_response(&response);

    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Content-Encoding: gzip\r\n"));
    assert!(head.contains(&format!("Content-Length: {}\r\n", body.len())));

    let mut decoder = GzDecoder::new(&body[..]);
    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).unwrap();
    assert_eq!(decoded, "hello");
}

#[test]
fn test_echo_unsupported_encoding() {
    let addr = start_server(&temp_dir("noenc"));
    let response = send_raw(
        addr,
        b"GET /echo/hello HTTP/1.1\r\nAccept-Encoding: invalid-encoding\r\n\r\n",
    );
    let (head, body) = split_response(&response);

    assert!(!head.contains("Content-Encoding"));
    assert_eq!(body, b"hello");
}

#[test]
fn test_user_agent_endpoint() {
    let addr = start_server(&temp_dir("ua"));
    let response = send_raw(
        addr,
        b"GET /user-agent HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent: curl/8.1.2\r\n\r\n",
    );

    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 10\r\n\r\ncurl/8.1.2".to_vec()
    );
}

#[test]
fn test_post_then_get_file() {
    let dir = temp_dir("files");
    let addr = start_server(&dir);

    let response = send_raw(
        addr,
        b"POST /files/note.txt HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc",
    );
    assert_eq!(response, b"HTTP/1.1 201 Created\r\n\r\n".to_vec());
    assert_eq!(std::fs::read(dir.join("note.txt")).unwrap(), b"abc");

    let response = send_raw(addr, b"GET /files/note.txt HTTP/1.1\r\n\r\n");
    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 3\r\n\r\nabc"
            .to_vec()
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_file() {
    let addr = start_server(&temp_dir("missing"));
    let response = send_raw(addr, b"GET /files/doesnotexist HTTP/1.1\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n".to_vec());
}

#[test]
fn test_file_traversal_rejected() {
    let addr = start_server(&temp_dir("traversal"));
    let response = send_raw(addr, b"GET /files/../../etc/passwd HTTP/1.1\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n".to_vec());
}

#[test]
fn test_not_found() {
    let addr = start_server(&temp_dir("nf"));
    let response = send_raw(addr, b"GET /nope HTTP/1.1\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n".to_vec());
}

#[test]
fn test_malformed_request_line() {
    let addr = start_server(&temp_dir("bad"));
    let response = send_raw(addr, b"GET\r\n\r\n");

    assert_eq!(response, b"HTTP/1.1 400 Bad Request\r\n\r\n".to_vec());
}

#[test]
fn test_sequential_requests_on_one_connection() {
    let addr = start_server(&temp_dir("seq"));
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

    for text in ["one", "two", "three"] {
        let request = format!("GET /echo/{} HTTP/1.1\r\n\r\n", text);
        stream.write_all(request.as_bytes()).unwrap();

        let expected = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{}",
            text.len(),
            text
        );
        let mut buf = vec![0u8; expected.len()];
        stream.read_exact(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }
}

#[test]
fn test_concurrent_connections() {
    let addr = start_server(&temp_dir("concurrent"));

    // Una conexión ociosa no debe bloquear a las demás
    let _idle = TcpStream::connect(addr).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let request = format!("GET /echo/{} HTTP/1.1\r\n\r\n", i);
                let response = send_raw(addr, request.as_bytes());
                let (_, body) = split_response(&response);
                assert_eq!(body, i.to_string().into_bytes());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
