use crate::ports::DnsResolver;
use rootwalk_domain::{DomainError, Packet};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Answers one inbound query packet by resolving its question from the root.
pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Returns the final response re-keyed with the query's transaction ID.
    pub async fn execute(&self, query: &Packet) -> Result<Packet, DomainError> {
        let question = match query.questions.as_slice() {
            [question] => question,
            questions => {
                return Err(DomainError::Decode(format!(
                    "only 1 question allowed, got {}",
                    questions.len()
                )))
            }
        };

        let start = Instant::now();
        info!(
            id = query.header.id,
            name = %question.name,
            record_type = %question.record_type,
            "Query received"
        );

        let mut response = self.resolver.resolve(question).await?;
        response.header.id = query.header.id;

        debug!(
            id = query.header.id,
            answers = response.answers.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Query resolved"
        );
        Ok(response)
    }
}
