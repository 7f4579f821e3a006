use async_trait::async_trait;
use netlab_dns_domain::{DnsMessage, DomainError, DomainName, RecordType};
use std::net::IpAddr;

/// Name resolution starting from a given server address. Servers forward
/// through this port when recursion is enabled, which also keeps them
/// testable with a fake resolver.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(
        &self,
        name: &DomainName,
        record_type: RecordType,
        server: IpAddr,
    ) -> Result<DnsMessage, DomainError>;

    /// Address lookup with the localhost short-circuit.
    async fn resolve_a(&self, name: &str, server: IpAddr) -> Result<DnsMessage, DomainError>;
}
