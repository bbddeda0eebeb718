#![cfg(feature = "reqwest-client")]

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use voynich_client::{Error, HttpClient, ReqwestClient, VoynichClient};

/// Serve exactly one HTTP exchange and hand back the raw request text.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0));
    let listener = TcpListener::bind(addr).await.expect("bind");
    let bound_addr = listener.local_addr().expect("local addr");

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
        request
    });

    (format!("http://{}/api/traversal", bound_addr), server)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.expect("read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let content_length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[tokio::test]
async fn success_returns_the_body() {
    let (url, server) = serve_once("200 OK", r#"{"status":true,"assets":["USDV"]}"#).await;

    let http = ReqwestClient::new().unwrap();
    let body = http.post_json(&url, r#"{"action":"supported"}"#).await.unwrap();
    assert_eq!(body, r#"{"status":true,"assets":["USDV"]}"#);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/traversal HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"action":"supported"}"#));
}

#[tokio::test]
async fn non_success_status_is_an_http_post_error() {
    let (url, server) =
        serve_once("500 Internal Server Error", r#"{"status":false,"log":"boom"}"#).await;

    let res = ReqwestClient::new().unwrap().post_json(&url, "{}").await;
    match res {
        Err(Error::HttpPost(msg)) => {
            assert!(msg.contains("500"), "unexpected message: {}", msg);
            assert!(msg.contains("boom"), "unexpected message: {}", msg);
        }
        other => panic!("expected HttpPost error, got {:?}", other),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn non_success_status_reaches_callers_as_transport_failure() {
    let (url, server) = serve_once("404 Not Found", r#"{"status":true}"#).await;

    let client = VoynichClient::new(url, ReqwestClient::new().unwrap()).unwrap();
    let reply = client.validate("vx1member").await;

    assert_eq!(
        reply.into_json(),
        json!({"status": false, "log": "Failed to communicate with voynich mainnet"})
    );

    let request = server.await.unwrap();
    let sent: Value = serde_json::from_str(request.split("\r\n\r\n").nth(1).unwrap()).unwrap();
    assert_eq!(sent, json!({"action": "validate", "address": "vx1member"}));
}
