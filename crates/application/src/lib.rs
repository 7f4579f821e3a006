//! Netlab DNS Application Layer
pub mod ports;
pub mod services;

pub use ports::{QueryAgent, Resolver};
pub use services::{DelegatingServer, StubResolver};
