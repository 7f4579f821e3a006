#![allow(dead_code)]

use netlab_dns_application::{DelegatingServer, Resolver, StubResolver};
use netlab_dns_domain::{DomainName, RecordType};
use netlab_dns_infrastructure::{SimulatedTransport, VirtualNetwork};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

pub fn name(s: &str) -> DomainName {
    DomainName::parse(s).unwrap()
}

pub fn addr(s: &str) -> IpAddr {
    s.parse().unwrap()
}

/// A resolver riding on the given network with a short per-hop budget, both
/// for injecting into servers and for driving queries as the client side.
pub fn resolver_on(network: &Arc<VirtualNetwork>) -> Arc<dyn Resolver> {
    let transport = Arc::new(
        SimulatedTransport::new(network.clone()).with_timeout(Duration::from_millis(250)),
    );
    Arc::new(StubResolver::new(transport))
}

pub async fn attach_server(
    network: &Arc<VirtualNetwork>,
    resolver: &Arc<dyn Resolver>,
    address: &str,
    records: &[(&str, RecordType, &str)],
) -> Arc<DelegatingServer> {
    let server = Arc::new(DelegatingServer::new(resolver.clone()));
    for (owner, record_type, data) in records {
        server.add_record(owner, *record_type, data).await.unwrap();
    }
    network.attach(addr(address), server.clone());
    server
}
