pub mod dns;

pub use dns::{HandleDnsQueryUseCase, LookupAddressUseCase, ResolveDomainUseCase};
