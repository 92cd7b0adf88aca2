#![allow(dead_code)]

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use whisperer_core::identify::SeededSelector;
use whisperer_core::{IdentificationClient, IdentificationClientBuilder, ImagePayload};

pub const FICUS_RESPONSE: &str = r#"{
    "results": [{
        "score": 0.92,
        "species": {
            "scientificName": "Ficus lyrata Warb.",
            "scientificNameWithoutAuthor": "Ficus lyrata",
            "commonNames": ["Fiddle Leaf Fig", "Banjo Fig"],
            "family": {"scientificNameWithoutAuthor": "Moraceae", "scientificName": "Moraceae"}
        }
    }]
}"#;

pub const MONSTERA_RESPONSE: &str = r#"{
    "results": [{
        "score": 0.874,
        "species": {
            "scientificName": "Monstera deliciosa Liebm.",
            "scientificNameWithoutAuthor": "Monstera deliciosa",
            "commonNames": ["Swiss cheese plant"],
            "family": {"scientificNameWithoutAuthor": "Araceae"}
        }
    }]
}"#;

/// Starts a one-shot HTTP server answering with `status` and `body`.
///
/// The handle resolves to the raw request the server received.
pub async fn mock_service(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let url = format!("http://127.0.0.1:{port}/v2/identify");
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return String::new();
        };
        let request = read_request(&mut stream).await;

        let resp = format!(
            "HTTP/1.1 {status} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = stream.write_all(resp.as_bytes()).await;
        let _ = stream.shutdown().await;
        request
    });

    (url, handle)
}

/// Starts a server that reads one request and never answers it.
pub async fn silent_service() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let url = format!("http://127.0.0.1:{port}/v2/identify");

    let handle = tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            read_request(&mut stream).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
    });

    (url, handle)
}

/// An endpoint on a port nothing listens on.
pub async fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/v2/identify")
}

/// Reads headers and the whole body so the client never sees a reset.
async fn read_request(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 8192];

    loop {
        let Ok(n) = stream.read(&mut buf).await else {
            break;
        };
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);

        let Some(header_end) = find(&data, b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&data[..header_end]).to_ascii_lowercase();
        let body = &data[header_end + 4..];

        let content_length = headers.lines().find_map(|line| {
            line.strip_prefix("content-length:")
                .and_then(|v| v.trim().parse::<usize>().ok())
        });
        let complete = match content_length {
            Some(len) => body.len() >= len,
            None if headers.contains("transfer-encoding: chunked") => {
                find(body, b"0\r\n\r\n").is_some()
            }
            None => true,
        };
        if complete {
            break;
        }
    }

    String::from_utf8_lossy(&data).into_owned()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// A client pointed at `endpoint` with deterministic affirmations.
pub fn test_client(endpoint: &str) -> IdentificationClient {
    client_builder(endpoint)
        .build()
        .expect("Failed to build client")
}

/// Like [`test_client`], giving up on requests after `timeout`.
pub fn test_client_with_timeout(endpoint: &str, timeout: Duration) -> IdentificationClient {
    client_builder(endpoint)
        .with_timeout(timeout)
        .build()
        .expect("Failed to build client")
}

fn client_builder(endpoint: &str) -> IdentificationClientBuilder {
    IdentificationClientBuilder::new()
        .with_endpoint(endpoint)
        .with_api_key("test-key")
        .with_selector(Box::new(SeededSelector::new(7)))
}

pub fn jpeg_payload() -> ImagePayload {
    ImagePayload::new(vec![0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3], "plant-photo.jpg", "image/jpeg")
}
