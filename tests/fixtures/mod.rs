//! Test server fixture shared by the HTTP API tests.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use idobata::{app, domain::BoardRepository, infrastructure::repository::InMemoryBoardRepository};

/// An in-memory server instance bound to a fixed local port.
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Start the server on the given port and wait until it accepts
    /// connections.
    pub async fn start(port: u16) -> Self {
        let repository: Arc<dyn BoardRepository> = Arc::new(InMemoryBoardRepository::new());
        let router = app(repository);
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .expect("failed to bind test port");
        let addr = listener.local_addr().expect("failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("test server crashed");
        });

        for _ in 0..50 {
            if tokio::net::TcpStream::connect(addr).await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self { addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}
