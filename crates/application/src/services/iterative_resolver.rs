use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use rootwalk_domain::{
    find_record, DomainError, DomainName, HeaderFlags, Packet, Question, RecordType,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, Instrument};

use crate::ports::{DnsResolver, IdSource, QueryTransport};

const DEFAULT_NAMESERVER_PORT: u16 = 53;
const DEFAULT_MAX_ITERATIONS: usize = 32;
const DEFAULT_MAX_DEPTH: usize = 8;

/// What one response tells the resolver to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NextHop {
    /// The answer section holds a record of the asked-for type.
    Answered,
    /// An `A` record in the additional section gives the next server.
    Glue(Ipv4Addr),
    /// Only an `NS` name is known; its address must be resolved first.
    Referral(DomainName),
    /// No answer and nowhere left to go.
    DeadEnd,
}

impl NextHop {
    /// Answer beats glue, glue beats referral.
    fn from_response(question: &Question, response: &Packet) -> Self {
        if find_record(&response.answers, question.record_type).is_some() {
            return NextHop::Answered;
        }
        if let Some(ip) = find_record(&response.additionals, RecordType::A).and_then(|r| r.ipv4())
        {
            return NextHop::Glue(ip);
        }
        match find_record(&response.authorities, RecordType::NS).and_then(|r| r.name_server()) {
            Some(host) => NextHop::Referral(host.clone()),
            None => NextHop::DeadEnd,
        }
    }
}

/// Walks the delegation chain from a root server down to an answer.
///
/// Every hop is a single query awaited before the next one is built, and a
/// referral without glue runs a complete nested resolution of the
/// nameserver's address before continuing. The total number of queries a
/// resolution may send and the nesting depth are both bounded.
pub struct IterativeResolver {
    transport: Arc<dyn QueryTransport>,
    id_source: Arc<dyn IdSource>,
    root_server: SocketAddr,
    nameserver_port: u16,
    max_iterations: usize,
    max_depth: usize,
    shutdown: CancellationToken,
}

/// Queries left for one top-level resolution, shared by every nested
/// nameserver lookup it triggers.
struct QueryBudget {
    used: AtomicUsize,
    limit: usize,
}

impl QueryBudget {
    fn new(limit: usize) -> Self {
        Self {
            used: AtomicUsize::new(0),
            limit,
        }
    }

    fn charge(&self) -> Result<usize, DomainError> {
        let used = self.used.fetch_add(1, Ordering::Relaxed);
        if used >= self.limit {
            return Err(DomainError::ResolutionLoop { limit: self.limit });
        }
        Ok(used)
    }
}

impl IterativeResolver {
    pub fn new(
        transport: Arc<dyn QueryTransport>,
        id_source: Arc<dyn IdSource>,
        root_server: SocketAddr,
    ) -> Self {
        Self {
            transport,
            id_source,
            root_server,
            nameserver_port: DEFAULT_NAMESERVER_PORT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_depth: DEFAULT_MAX_DEPTH,
            shutdown: CancellationToken::new(),
        }
    }

    /// `max_iterations` caps the queries of a whole resolution, nested
    /// nameserver lookups included. `max_depth` caps the nesting.
    pub fn with_limits(mut self, max_iterations: usize, max_depth: usize) -> Self {
        self.max_iterations = max_iterations;
        self.max_depth = max_depth;
        self
    }

    pub fn with_nameserver_port(mut self, port: u16) -> Self {
        self.nameserver_port = port;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Resolves `question`, aborting with `DomainError::Cancelled` as soon
    /// as `cancel` fires.
    pub async fn resolve_with_cancellation(
        &self,
        question: &Question,
        cancel: &CancellationToken,
    ) -> Result<Packet, DomainError> {
        let budget = QueryBudget::new(self.max_iterations);
        self.resolve_at_depth(question.clone(), 0, &budget, cancel).await
    }

    fn resolve_at_depth<'a>(
        &'a self,
        question: Question,
        depth: usize,
        budget: &'a QueryBudget,
        cancel: &'a CancellationToken,
    ) -> BoxFuture<'a, Result<Packet, DomainError>> {
        let span = tracing::debug_span!("resolve", name = %question.name, depth);
        async move {
            let mut server = self.root_server;

            loop {
                let query_number = budget.charge()?;
                info!(
                    server = %server,
                    name = %question.name,
                    record_type = %question.record_type,
                    query_number,
                    "Querying nameserver"
                );

                let query = Packet::query(
                    self.id_source.next_id(),
                    question.name.clone(),
                    question.record_type,
                    HeaderFlags::default(),
                );

                let response = tokio::select! {
                    _ = cancel.cancelled() => return Err(DomainError::Cancelled),
                    result = self.transport.exchange(server, &query) => result?,
                };

                match NextHop::from_response(&question, &response) {
                    NextHop::Answered => {
                        let answers = response.answers.len();
                        debug!(server = %server, answers, "Answer received");
                        return Ok(response);
                    }
                    NextHop::Glue(ip) => {
                        debug!(glue = %ip, "Following glue address");
                        server = SocketAddr::new(ip.into(), self.nameserver_port);
                    }
                    NextHop::Referral(host) => {
                        if depth >= self.max_depth {
                            return Err(DomainError::ResolutionLoop {
                                limit: self.max_depth,
                            });
                        }
                        debug!(nameserver = %host, "Resolving nameserver address");
                        let nested = Question::new(host.clone(), RecordType::A);
                        let reply = self
                            .resolve_at_depth(nested, depth + 1, budget, cancel)
                            .await?;
                        let ip = reply
                            .find_answer(RecordType::A)
                            .and_then(|r| r.ipv4())
                            .ok_or_else(|| {
                                DomainError::NoAnswer(format!("no address for nameserver {host}"))
                            })?;
                        server = SocketAddr::new(ip.into(), self.nameserver_port);
                    }
                    NextHop::DeadEnd => {
                        debug!(server = %server, "No answer and no further delegation");
                        return Ok(response);
                    }
                }
            }
        }
        .instrument(span)
        .boxed()
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, question: &Question) -> Result<Packet, DomainError> {
        self.resolve_with_cancellation(question, &self.shutdown).await
    }
}
