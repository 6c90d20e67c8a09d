use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tracing::debug;

use sr_core::ports::ConnectivityPort;

/// Treats the network as connected when a TCP handshake with `addr`
/// completes within `timeout`.
pub struct TcpConnectivityProbe {
    addr: String,
    timeout: Duration,
}

impl TcpConnectivityProbe {
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ConnectivityPort for TcpConnectivityProbe {
    async fn is_connected(&self) -> bool {
        match tokio::time::timeout(self.timeout, TcpStream::connect(&self.addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(err)) => {
                debug!(addr = %self.addr, error = %err, "connectivity probe failed");
                false
            }
            Err(_) => {
                debug!(addr = %self.addr, "connectivity probe timed out");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn reachable_listener_counts_as_connected() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let probe = TcpConnectivityProbe::new(
            listener.local_addr().unwrap().to_string(),
            Duration::from_secs(2),
        );

        assert!(probe.is_connected().await);
    }

    #[tokio::test]
    async fn closed_port_counts_as_offline() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let probe = TcpConnectivityProbe::new(addr.to_string(), Duration::from_secs(2));

        assert!(!probe.is_connected().await);
    }
}
