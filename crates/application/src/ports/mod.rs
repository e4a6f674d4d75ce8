mod dns_resolver;
mod id_source;
mod query_transport;

pub use dns_resolver::DnsResolver;
pub use id_source::IdSource;
pub use query_transport::QueryTransport;
