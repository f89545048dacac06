//! Test server fixture: runs the real router on an ephemeral port.

use clap::Parser;
use roomly_server::{ServerConfig, ui::serve};
use tokio::{net::TcpListener, sync::oneshot};

pub struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Start a server with the given extra command line flags
    pub async fn start(args: &[&str]) -> Self {
        let config = ServerConfig::try_parse_from(
            std::iter::once("roomly-server").chain(args.iter().copied()),
        )
        .expect("Failed to parse test config");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            serve(listener, config, async {
                let _ = rx.await;
            })
            .await
            .expect("Test server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            shutdown: Some(tx),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
