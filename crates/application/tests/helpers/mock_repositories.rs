#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::{DnsResolver, IdSource, QueryTransport};
use rootwalk_domain::{DomainError, Header, HeaderFlags, Packet, Question, Record};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

pub const ROOT: &str = "192.0.2.1:53";

pub fn root_addr() -> SocketAddr {
    ROOT.parse().unwrap()
}

pub fn addr(s: &str) -> SocketAddr {
    s.parse().unwrap()
}

/// Builds response packets with consistent header counts.
#[derive(Default)]
pub struct ResponseBuilder {
    answers: Vec<Record>,
    authorities: Vec<Record>,
    additionals: Vec<Record>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: Record) -> Self {
        self.authorities.push(record);
        self
    }

    pub fn additional(mut self, record: Record) -> Self {
        self.additionals.push(record);
        self
    }

    pub fn build(self) -> Packet {
        let mut packet = Packet {
            header: Header {
                flags: HeaderFlags::from_bits(HeaderFlags::RESPONSE),
                ..Header::default()
            },
            questions: vec![],
            answers: self.answers,
            authorities: self.authorities,
            additionals: self.additionals,
        };
        packet.sync_counts().unwrap();
        packet
    }
}

#[derive(Debug, Clone)]
pub struct SentQuery {
    pub server: SocketAddr,
    pub id: u16,
    pub flags: HeaderFlags,
    pub question: Question,
}

/// Scripted nameservers keyed by server address and query name. A response
/// registered for a server alone answers every name sent to that server.
#[derive(Default)]
pub struct MockTransport {
    by_name: Mutex<HashMap<(SocketAddr, String), Packet>>,
    by_server: Mutex<HashMap<SocketAddr, Packet>>,
    errors: Mutex<HashMap<SocketAddr, DomainError>>,
    sent: Mutex<Vec<SentQuery>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, server: SocketAddr, name: &str, response: Packet) {
        self.by_name
            .lock()
            .unwrap()
            .insert((server, name.to_string()), response);
    }

    pub fn respond_to_all(&self, server: SocketAddr, response: Packet) {
        self.by_server.lock().unwrap().insert(server, response);
    }

    pub fn fail(&self, server: SocketAddr, error: DomainError) {
        self.errors.lock().unwrap().insert(server, error);
    }

    pub fn sent(&self) -> Vec<SentQuery> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self) -> Vec<(SocketAddr, String)> {
        self.sent()
            .into_iter()
            .map(|q| (q.server, q.question.name.to_string()))
            .collect()
    }
}

#[async_trait]
impl QueryTransport for MockTransport {
    async fn exchange(&self, server: SocketAddr, query: &Packet) -> Result<Packet, DomainError> {
        let question = query.questions[0].clone();
        self.sent.lock().unwrap().push(SentQuery {
            server,
            id: query.header.id,
            flags: query.header.flags,
            question: question.clone(),
        });

        if let Some(err) = self.errors.lock().unwrap().get(&server).cloned() {
            return Err(err);
        }

        let key = (server, question.name.to_string());
        let scripted = self
            .by_name
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .or_else(|| self.by_server.lock().unwrap().get(&server).cloned());

        let mut response = scripted.ok_or_else(|| {
            DomainError::Transport(format!("No mock response from {} for {}", server, key.1))
        })?;
        response.header.id = query.header.id;
        response.questions = vec![question];
        response.sync_counts()?;
        Ok(response)
    }
}

/// Never answers; only cancellation ends a query sent through it.
pub struct PendingTransport;

#[async_trait]
impl QueryTransport for PendingTransport {
    async fn exchange(&self, _server: SocketAddr, _query: &Packet) -> Result<Packet, DomainError> {
        std::future::pending().await
    }
}

/// Hands out 1, 2, 3, ...
#[derive(Default)]
pub struct SequentialIdSource {
    next: AtomicU16,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> u16 {
        self.next.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }
}

#[derive(Default)]
pub struct MockDnsResolver {
    responses: Mutex<HashMap<String, Packet>>,
    error_responses: Mutex<HashMap<String, DomainError>>,
    calls: Mutex<Vec<Question>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, response: Packet) {
        self.responses
            .lock()
            .unwrap()
            .insert(name.to_string(), response);
    }

    pub fn set_response_error(&self, name: &str, error: DomainError) {
        self.error_responses
            .lock()
            .unwrap()
            .insert(name.to_string(), error);
    }

    pub fn calls(&self) -> Vec<Question> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, question: &Question) -> Result<Packet, DomainError> {
        self.calls.lock().unwrap().push(question.clone());
        let name = question.name.to_string();

        if let Some(err) = self.error_responses.lock().unwrap().get(&name).cloned() {
            return Err(err);
        }

        self.responses
            .lock()
            .unwrap()
            .get(&name)
            .cloned()
            .ok_or_else(|| DomainError::Transport(format!("No mock response for {}", name)))
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
