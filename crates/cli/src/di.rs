use netlab_dns_application::{DelegatingServer, Resolver, StubResolver};
use netlab_dns_domain::{DnsMessage, DomainError, DomainName, RecordType, TopologyConfig};
use netlab_dns_infrastructure::{SimulatedTransport, VirtualNetwork};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// A wired topology: the virtual network with every configured server
/// attached, plus the client-side resolver used to issue queries into it.
pub struct Simulation {
    resolver: Arc<dyn Resolver>,
}

impl Simulation {
    pub async fn new(config: &TopologyConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let network = Arc::new(VirtualNetwork::new());
        let transport = Arc::new(
            SimulatedTransport::new(network.clone())
                .with_timeout(Duration::from_millis(config.resolver.query_timeout_ms))
                .with_latency(Duration::from_millis(config.resolver.latency_ms)),
        );
        let resolver: Arc<dyn Resolver> = Arc::new(
            StubResolver::new(transport).with_max_referrals(config.resolver.max_referrals),
        );

        for server_config in &config.servers {
            let mut server =
                DelegatingServer::new(resolver.clone()).with_recursion(server_config.recursion);
            if let Some(address) = server_config.default_name_server {
                server = server.with_default_name_server(address);
            }
            server.load_records(&server_config.records).await?;
            network.attach(server_config.address, Arc::new(server));
        }

        info!(servers = network.len(), "Topology wired");
        Ok(Self { resolver })
    }

    pub async fn resolve(
        &self,
        name: &str,
        record_type: RecordType,
        server: IpAddr,
    ) -> Result<DnsMessage, DomainError> {
        match record_type {
            RecordType::A => self.resolver.resolve_a(name, server).await,
            _ => {
                let name = DomainName::parse(name)?;
                self.resolver.resolve(&name, record_type, server).await
            }
        }
    }
}
