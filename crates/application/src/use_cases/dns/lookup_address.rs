use crate::ports::{IdSource, QueryTransport};
use rootwalk_domain::{DomainError, DomainName, HeaderFlags, Packet, RecordType};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::debug;

/// Asks one server for an address, with recursion desired and no iteration.
pub struct LookupAddressUseCase {
    transport: Arc<dyn QueryTransport>,
    id_source: Arc<dyn IdSource>,
}

impl LookupAddressUseCase {
    pub fn new(transport: Arc<dyn QueryTransport>, id_source: Arc<dyn IdSource>) -> Self {
        Self {
            transport,
            id_source,
        }
    }

    pub async fn execute(
        &self,
        server: SocketAddr,
        domain: &DomainName,
    ) -> Result<Ipv4Addr, DomainError> {
        let query = Packet::query(
            self.id_source.next_id(),
            domain.clone(),
            RecordType::A,
            HeaderFlags::recursion_desired(),
        );

        let response = self.transport.exchange(server, &query).await?;
        debug!(
            server = %server,
            domain = %domain,
            answers = response.answers.len(),
            "Lookup response received"
        );

        response
            .find_answer(RecordType::A)
            .and_then(|r| r.ipv4())
            .ok_or_else(|| {
                DomainError::NoAnswer(format!("no A record for {} at {}", domain, server))
            })
    }
}
