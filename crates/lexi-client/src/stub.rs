//! One-shot HTTP server on localhost for exercising the clients

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Client that talks to the stub directly, ignoring any configured proxy
pub fn client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap()
}

pub struct StubServer {
    pub base_url: String,
    request: oneshot::Receiver<String>,
}

impl StubServer {
    /// Answer the first request with `status` and `body`
    pub async fn reply(status: &str, body: &str) -> Self {
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        Self::start(Some(response)).await
    }

    /// Accept the first request and never answer it
    pub async fn stall() -> Self {
        Self::start(None).await
    }

    /// The request head the server received, lowercased
    pub async fn request(self) -> String {
        tokio::time::timeout(Duration::from_secs(2), self.request)
            .await
            .expect("Timeout waiting for request")
            .expect("Server dropped before a request arrived")
    }

    async fn start(response: Option<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (request_tx, request) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }
            let _ = request_tx.send(String::from_utf8_lossy(&head).to_ascii_lowercase());

            match response {
                Some(response) => {
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                }
                None => tokio::time::sleep(Duration::from_secs(10)).await,
            }
        });

        Self { base_url, request }
    }
}
