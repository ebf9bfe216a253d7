//! Shared utilities for integration testing.
//!
//! The logger is blocking, so the mock intake runs on its own tokio
//! runtime and tests call the logger from the plain test thread.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::runtime::Runtime;

use datadog_logger::tags::{CloudProvider, Condominio, Environment, Tags};

/// One request received by the mock intake.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lower-cased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// A programmable HTTP intake bound to an ephemeral local port.
pub struct MockIntake {
    // Owns the accept loop; dropping it stops the server.
    _runtime: Runtime,
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockIntake {
    pub fn url(&self) -> url::Url {
        format!("http://{}/api/v2/logs", self.addr).parse().unwrap()
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a mock intake that answers every request with `status`.
pub fn start_mock_intake(status: u16) -> MockIntake {
    start_programmable_intake(move |_| (status, String::new()))
}

/// Start a mock intake whose response is chosen per request.
pub fn start_programmable_intake<F>(f: F) -> MockIntake
where
    F: Fn(&CapturedRequest) -> (u16, String) + Send + Sync + 'static,
{
    let runtime = Runtime::new().unwrap();
    let listener = runtime
        .block_on(TcpListener::bind("127.0.0.1:0"))
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let captured = requests.clone();
    runtime.spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    let captured = captured.clone();
                    tokio::spawn(async move {
                        let _ = serve(socket, f.as_ref(), &captured).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockIntake {
        _runtime: runtime,
        addr,
        requests,
    }
}

async fn serve<F>(
    mut socket: TcpStream,
    f: &F,
    captured: &Mutex<Vec<CapturedRequest>>,
) -> io::Result<()>
where
    F: Fn(&CapturedRequest) -> (u16, String),
{
    let request = read_request(&mut socket).await?;
    let (status, body) = f(&request);
    captured.lock().unwrap().push(request);

    let status_text = match status {
        200 => "200 OK",
        202 => "202 Accepted",
        400 => "400 Bad Request",
        403 => "403 Forbidden",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\
         Connection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

/// Read the head and a `Content-Length` body.
async fn read_request(socket: &mut TcpStream) -> io::Result<CapturedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos;
        }
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();

    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();
    let content_length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let body_start = head_end + 4;
    while buf.len() < body_start + content_length {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[body_start..body_start + content_length]).into_owned();

    Ok(CapturedRequest {
        method,
        path,
        headers,
        body,
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// In-memory writer that stays readable after being handed to a sink.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An aws + devops tag set, which needs `repo_url`.
pub fn aws_devops_tags() -> Tags {
    Tags {
        sigla: "QJ6".into(),
        cloud_provider: Some(CloudProvider::Aws),
        condominio: Some(Condominio::Devops),
        account_id: "123456789012".into(),
        environment: Some(Environment::Dev),
        version: "1.0.0".into(),
        service: "QJ6-TEST".into(),
        produto: "X".into(),
        jornada: "Y".into(),
        correlation_id: "123456789".into(),
        repo_url: Some("https://x".into()),
        ..Default::default()
    }
}

/// The QJ6 tag set used across the integration tests.
pub fn qj6_tags() -> Tags {
    Tags {
        sigla: "QJ6".into(),
        cloud_provider: Some(CloudProvider::Gcp),
        condominio: Some(Condominio::Paas),
        account_id: "123456".into(),
        environment: Some(Environment::Dev),
        version: "1.0.0".into(),
        service: "QJ6-TEST".into(),
        produto: "Logging".into(),
        jornada: "Observability".into(),
        correlation_id: "8d3b6f0e-0000-4000-8000-000000000001".into(),
        ..Default::default()
    }
}
