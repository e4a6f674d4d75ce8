use async_trait::async_trait;
use rootwalk_domain::{DomainError, Packet};
use std::net::SocketAddr;

#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Sends `query` to `server` exactly once and returns the decoded reply.
    ///
    /// Implementations enforce their own read deadline and report it as
    /// `DomainError::Timeout`.
    async fn exchange(&self, server: SocketAddr, query: &Packet) -> Result<Packet, DomainError>;
}
