mod handle_dns_query;
mod lookup_address;
mod resolve_domain;

pub use handle_dns_query::HandleDnsQueryUseCase;
pub use lookup_address::LookupAddressUseCase;
pub use resolve_domain::ResolveDomainUseCase;
