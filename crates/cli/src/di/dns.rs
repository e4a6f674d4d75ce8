use rootwalk_application::ports::{DnsResolver, IdSource, QueryTransport};
use rootwalk_application::services::IterativeResolver;
use rootwalk_application::use_cases::{
    HandleDnsQueryUseCase, LookupAddressUseCase, ResolveDomainUseCase,
};
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{RandomIdSource, UdpTransport};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct DnsServices {
    pub handle_query: Arc<HandleDnsQueryUseCase>,
    pub resolve_domain: Arc<ResolveDomainUseCase>,
    pub lookup_address: Arc<LookupAddressUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config, shutdown: CancellationToken) -> anyhow::Result<Self> {
        let root_server = config.resolver.root_server_addr()?;

        info!(
            root_server = %root_server,
            timeout_ms = config.resolver.query_timeout_ms,
            max_iterations = config.resolver.max_iterations,
            max_depth = config.resolver.max_depth,
            "Initializing iterative resolver"
        );

        let transport: Arc<dyn QueryTransport> =
            Arc::new(UdpTransport::new(config.resolver.query_timeout()));
        let id_source: Arc<dyn IdSource> = Arc::new(RandomIdSource::new());

        let resolver: Arc<dyn DnsResolver> = Arc::new(
            IterativeResolver::new(transport.clone(), id_source.clone(), root_server)
                .with_nameserver_port(config.resolver.nameserver_port)
                .with_limits(config.resolver.max_iterations, config.resolver.max_depth)
                .with_cancellation(shutdown),
        );

        Ok(Self {
            handle_query: Arc::new(HandleDnsQueryUseCase::new(resolver.clone())),
            resolve_domain: Arc::new(ResolveDomainUseCase::new(resolver)),
            lookup_address: Arc::new(LookupAddressUseCase::new(transport, id_source)),
        })
    }
}
