use crate::ports::DnsResolver;
use rootwalk_domain::{DomainError, Packet, Question, Record};
use std::sync::Arc;

/// Iterative resolution narrowed down to the first matching answer.
pub struct ResolveDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Full final response, which may carry no answer.
    pub async fn resolve_packet(&self, question: &Question) -> Result<Packet, DomainError> {
        self.resolver.resolve(question).await
    }

    pub async fn execute(&self, question: &Question) -> Result<Record, DomainError> {
        let response = self.resolver.resolve(question).await?;
        response
            .find_answer(question.record_type)
            .cloned()
            .ok_or_else(|| {
                DomainError::NoAnswer(format!(
                    "no {} record for {}",
                    question.record_type, question.name
                ))
            })
    }
}
