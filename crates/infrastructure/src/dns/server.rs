use crate::dns::transport::MAX_UDP_MESSAGE_SIZE;
use rootwalk_application::use_cases::HandleDnsQueryUseCase;
use rootwalk_domain::{DomainError, Packet};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Answers inbound UDP queries by resolving them from the root.
///
/// Datagrams are handled one at a time in arrival order. A query that fails
/// to decode or resolve is logged and dropped without a reply; only a socket
/// error or the shutdown token ends the loop.
pub struct UdpQueryServer {
    socket: UdpSocket,
    handler: Arc<HandleDnsQueryUseCase>,
}

impl UdpQueryServer {
    /// Takes ownership of an already-bound socket.
    pub fn new(socket: UdpSocket, handler: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { socket, handler }
    }

    pub async fn bind(
        addr: SocketAddr,
        handler: Arc<HandleDnsQueryUseCase>,
    ) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to bind {}: {}", addr, e)))?;
        Ok(Self::new(socket, handler))
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::Transport(e.to_string()))
    }

    pub async fn run(self, shutdown: CancellationToken) -> Result<(), DomainError> {
        let local_addr = self.local_addr()?;
        info!(bind_address = %local_addr, "DNS query server ready");

        let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

        loop {
            let (len, peer) = tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("DNS query server shutting down");
                    return Ok(());
                }
                received = self.socket.recv_from(&mut recv_buf) => received.map_err(|e| {
                    error!(error = %e, "UDP recv error");
                    DomainError::Transport(format!("UDP receive failed: {}", e))
                })?,
            };

            let served = tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("DNS query server shutting down");
                    return Ok(());
                }
                served = self.serve_one(&recv_buf[..len], peer) => served,
            };

            match served {
                Err(e) if e.is_wire_error() => {
                    debug!(client = %peer, error = %e, "Dropping malformed query");
                }
                Err(e) => warn!(client = %peer, error = %e, "Dropping query"),
                Ok(()) => {}
            }
        }
    }

    async fn serve_one(&self, datagram: &[u8], peer: SocketAddr) -> Result<(), DomainError> {
        let query = Packet::decode(datagram)?;
        let response = self.handler.execute(&query).await?;
        let wire = response.encode()?;

        self.socket
            .send_to(&wire, peer)
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to reply to {}: {}", peer, e)))?;

        debug!(client = %peer, id = response.header.id, bytes = wire.len(), "Response sent");
        Ok(())
    }
}
