use dashmap::DashMap;
use netlab_dns_application::DelegatingServer;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Address registry of the simulated network: which server instance listens
/// at which IP. Stands in for the link/transport stack of the surrounding
/// simulator at the query-agent boundary.
#[derive(Default)]
pub struct VirtualNetwork {
    servers: DashMap<IpAddr, Arc<DelegatingServer>>,
}

impl VirtualNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, address: IpAddr, server: Arc<DelegatingServer>) {
        debug!(address = %address, "Server attached");
        self.servers.insert(address, server);
    }

    pub fn detach(&self, address: IpAddr) -> Option<Arc<DelegatingServer>> {
        debug!(address = %address, "Server detached");
        self.servers.remove(&address).map(|(_, server)| server)
    }

    pub fn server(&self, address: IpAddr) -> Option<Arc<DelegatingServer>> {
        self.servers.get(&address).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}
