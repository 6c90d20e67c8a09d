use async_trait::async_trait;

#[async_trait]
pub trait ConnectivityPort: Send + Sync {
    async fn is_connected(&self) -> bool;
}
