#![allow(dead_code)]

use globe_core::{load_if_empty, CityStore, IngestOptions};
use std::path::PathBuf;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("geoname_example.txt")
}

pub fn fixture_text() -> String {
    std::fs::read_to_string(fixture_path()).expect("fixture readable")
}

/// Store loaded from the 9-row Andorra fixture.
pub fn loaded_store() -> CityStore {
    let mut store = CityStore::new();
    load_if_empty(&mut store, &IngestOptions::new(fixture_path())).expect("fixture loads");
    store
}

/// Answers a single HTTP request with `body` on a local port and returns the
/// base URL.
pub fn serve_once(body: Vec<u8>) -> String {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().expect("local addr");
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("client connects");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(head.as_bytes());
        let _ = stream.write_all(&body);
    });
    format!("http://{addr}")
}
