mod helpers;

use helpers::{MockDnsResolver, ResponseBuilder};
use rootwalk_application::use_cases::ResolveDomainUseCase;
use rootwalk_domain::{DomainError, Question, Record, RecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;

#[tokio::test]
async fn test_execute_returns_first_matching_answer() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver.set_response(
        "example.com",
        ResponseBuilder::new()
            .answer(Record::ns("example.com", 60, "ns.example.com"))
            .answer(Record::a("example.com", 60, Ipv4Addr::new(1, 2, 3, 4)))
            .build(),
    );

    let use_case = ResolveDomainUseCase::new(resolver);
    let record = use_case
        .execute(&Question::new("example.com", RecordType::A))
        .await
        .unwrap();

    assert_eq!(record.ipv4(), Some(Ipv4Addr::new(1, 2, 3, 4)));
}

#[tokio::test]
async fn test_execute_without_answer_is_no_answer() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver.set_response("missing.test", ResponseBuilder::new().build());

    let use_case = ResolveDomainUseCase::new(resolver);
    let result = use_case
        .execute(&Question::new("missing.test", RecordType::A))
        .await;

    assert!(matches!(result, Err(DomainError::NoAnswer(_))));
}

#[tokio::test]
async fn test_resolve_packet_keeps_empty_response() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver.set_response("missing.test", ResponseBuilder::new().build());

    let use_case = ResolveDomainUseCase::new(resolver.clone());
    let response = use_case
        .resolve_packet(&Question::new("missing.test", RecordType::A))
        .await
        .unwrap();

    assert!(response.answers.is_empty());
    assert_eq!(resolver.calls().len(), 1);
}
