//! Rootwalk Infrastructure Layer
//!
//! Network adapters for the application ports: the UDP query transport,
//! the random transaction ID source and the inbound UDP query server.
pub mod dns;
