use super::VirtualNetwork;
use async_trait::async_trait;
use netlab_dns_application::QueryAgent;
use netlab_dns_domain::{DnsMessage, DnsQuery, DomainError, DomainName, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use tracing::{debug, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Query agent riding on the virtual network. One `query` call is one
/// simulated round trip with its own time budget.
pub struct SimulatedTransport {
    network: Arc<VirtualNetwork>,
    timeout: Duration,
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(network: Arc<VirtualNetwork>) -> Self {
        Self {
            network,
            timeout: DEFAULT_TIMEOUT,
            latency: Duration::ZERO,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Artificial one-way delay, applied on the way out and on the way back.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl QueryAgent for SimulatedTransport {
    async fn query(
        &self,
        record_type: RecordType,
        name: &DomainName,
        server: IpAddr,
    ) -> Result<DnsMessage, DomainError> {
        let Some(target) = self.network.server(server) else {
            warn!(server = %server, name = %name, "No server listening; query went unanswered");
            return Err(DomainError::QueryTimeout { server });
        };

        debug!(
            server = %server,
            name = %name,
            record_type = %record_type,
            "Sending query"
        );
        let request = DnsMessage::query(DnsQuery::new(name.clone(), record_type));

        let round_trip = async {
            if !self.latency.is_zero() {
                time::sleep(self.latency).await;
            }
            let response = target.handle(&request).await;
            if !self.latency.is_zero() {
                time::sleep(self.latency).await;
            }
            response
        };

        match time::timeout(self.timeout, round_trip).await {
            Ok(response) => response,
            Err(_) => {
                warn!(
                    server = %server,
                    name = %name,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Query timed out"
                );
                Err(DomainError::QueryTimeout { server })
            }
        }
    }
}
