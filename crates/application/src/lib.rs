//! Rootwalk Application Layer
//!
//! Ports the outer layers implement, the iterative resolver built on them,
//! and the use cases the binary and the query server drive.
pub mod ports;
pub mod services;
pub mod use_cases;
