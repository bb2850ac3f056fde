use bytes::Bytes;
use http_body_util::Full;
use hyper::{body::Incoming, server::conn::http1, service::service_fn, Request, Response};
use hyper_util::rt::TokioIo;
use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tokio::{net::TcpListener, task::JoinHandle};

/// HTTP/1.1 server standing in for the discovery service.
/// Answers every request with the same status and body and records request lines.
pub struct DiscoveryStub {
    address: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

pub struct Builder {
    status: u16,
    body: String,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            status: 200,
            body: String::new(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub async fn build(self) -> DiscoveryStub {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let address = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let status = self.status;
        let body = Bytes::from(self.body);

        let handle = tokio::spawn(async move {
            loop {
                let (tcp, _) = match listener.accept().await {
                    Ok(s) => s,
                    Err(_) => break,
                };
                let io = TokioIo::new(tcp);
                let recorded = Arc::clone(&recorded);
                let body = body.clone();

                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let request_line =
                            format!("{} {} {:?}", req.method(), req.uri(), req.version());
                        recorded.lock().unwrap().push(request_line);
                        let response = Response::builder()
                            .status(status)
                            .header("content-type", "text/plain; charset=utf-8")
                            .body(Full::new(body.clone()))
                            .unwrap();
                        async move { Ok::<_, Infallible>(response) }
                    });

                    if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                        eprintln!("Stub failed to serve connection: {:?}", e);
                    }
                });
            }
        });

        DiscoveryStub {
            address,
            requests,
            handle,
        }
    }
}

impl DiscoveryStub {
    /// Endpoint URL to pass instead of the public discovery service.
    pub fn endpoint(&self) -> String {
        format!("http://{}/new", self.address)
    }

    /// Request lines received so far, e.g. "GET /new?size=3 HTTP/1.1".
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for DiscoveryStub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Endpoint of a port nobody listens on, so connections are refused.
pub async fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/new", address)
}
