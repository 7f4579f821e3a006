mod transport;
mod virtual_network;

pub use transport::SimulatedTransport;
pub use virtual_network::VirtualNetwork;
