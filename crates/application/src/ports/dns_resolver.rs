use async_trait::async_trait;
use rootwalk_domain::{DomainError, Packet, Question};

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolves `question` and returns the final response packet. A packet
    /// with no matching answer means "no answer", not an error.
    async fn resolve(&self, question: &Question) -> Result<Packet, DomainError>;
}
