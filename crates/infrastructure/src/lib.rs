//! Netlab DNS Infrastructure Layer
pub mod network;

pub use network::{SimulatedTransport, VirtualNetwork};
