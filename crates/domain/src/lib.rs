//! Rootwalk Domain Layer
//!
//! DNS message model and wire codec, shared error type and configuration.
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod header;
pub mod packet;
pub mod question;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{find_record, Record, RecordClass, RecordData, RecordType};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use header::{Header, HeaderFlags, HEADER_LEN};
pub use packet::Packet;
pub use question::Question;
