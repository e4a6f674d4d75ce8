//! UDP transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is with no framing and answers are limited to 512
//! bytes. A fresh ephemeral socket is bound for every exchange.

use async_trait::async_trait;
use rootwalk_application::ports::QueryTransport;
use rootwalk_domain::{DomainError, Packet};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Largest DNS message carried over plain UDP.
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

/// One query, one response, bounded by a read deadline.
pub struct UdpTransport {
    timeout: Duration,
}

impl UdpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn bind_for(server: SocketAddr) -> Result<UdpSocket, DomainError> {
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to bind UDP socket: {}", e)))
    }

    /// Waits for a datagram from `server`, dropping strays from anyone else.
    async fn recv_from_server(
        socket: &UdpSocket,
        server: SocketAddr,
        buf: &mut [u8],
    ) -> Result<usize, DomainError> {
        loop {
            let (len, from) = socket.recv_from(buf).await.map_err(|e| {
                DomainError::Transport(format!(
                    "Failed to receive UDP response from {}: {}",
                    server, e
                ))
            })?;

            if from == server {
                return Ok(len);
            }
            warn!(
                expected = %server,
                received_from = %from,
                "UDP response from unexpected source"
            );
        }
    }
}

#[async_trait]
impl QueryTransport for UdpTransport {
    async fn exchange(&self, server: SocketAddr, query: &Packet) -> Result<Packet, DomainError> {
        let message = query.encode()?;
        let socket = Self::bind_for(server).await?;

        let bytes_sent = socket.send_to(&message, server).await.map_err(|e| {
            DomainError::Transport(format!("Failed to send UDP query to {}: {}", server, e))
        })?;

        debug!(server = %server, id = query.header.id, bytes_sent, "UDP query sent");

        let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];
        let bytes_received = tokio::time::timeout(
            self.timeout,
            Self::recv_from_server(&socket, server, &mut recv_buf),
        )
        .await
        .map_err(|_| DomainError::Timeout {
            server: server.to_string(),
        })??;

        debug!(server = %server, bytes_received, "UDP response received");

        let response = Packet::decode(&recv_buf[..bytes_received])?;
        if response.header.id != query.header.id {
            return Err(DomainError::Decode(format!(
                "response ID {} does not match query ID {}",
                response.header.id, query.header.id
            )));
        }

        Ok(response)
    }
}
