use async_trait::async_trait;
use netlab_dns_domain::{DnsMessage, DomainError, DomainName, RecordType};
use std::net::IpAddr;

/// One request/response round trip against a server address.
///
/// Implementations ride on the simulated network. The round trip is the only
/// point where a resolution suspends, and the implementation owns the
/// per-round-trip time budget.
#[async_trait]
pub trait QueryAgent: Send + Sync {
    /// Fails with [`DomainError::QueryTimeout`] when no response arrives
    /// within the budget.
    async fn query(
        &self,
        record_type: RecordType,
        name: &DomainName,
        server: IpAddr,
    ) -> Result<DnsMessage, DomainError>;
}
