pub mod id_source;
pub mod server;
pub mod transport;

pub use id_source::RandomIdSource;
pub use server::UdpQueryServer;
pub use transport::UdpTransport;
