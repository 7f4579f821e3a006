use crate::ports::{QueryAgent, Resolver};
use async_trait::async_trait;
use netlab_dns_domain::{DnsMessage, DomainError, DomainName, RecordType, ResourceRecord};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::{debug, warn};

const DEFAULT_MAX_REFERRALS: usize = 16;
const LOCALHOST: &str = "localhost.";

/// Iterative resolver that walks NS referrals hop by hop until a server
/// returns an answer of the requested type or the delegation chain runs dry.
/// Nothing is cached between hops; each round trip has its own time budget
/// owned by the query agent.
pub struct StubResolver {
    agent: Arc<dyn QueryAgent>,
    max_referrals: usize,
}

impl StubResolver {
    pub fn new(agent: Arc<dyn QueryAgent>) -> Self {
        Self {
            agent,
            max_referrals: DEFAULT_MAX_REFERRALS,
        }
    }

    /// Caps the number of referral hops followed before giving up. Cyclic
    /// delegation data would otherwise loop forever.
    pub fn with_max_referrals(mut self, max_referrals: usize) -> Self {
        self.max_referrals = max_referrals;
        self
    }

    /// A usable referral is an NS answer whose nameserver hostname also has
    /// an A answer in the same message. An NS record without that glue
    /// cannot be followed.
    fn referral_target(response: &DnsMessage) -> Option<IpAddr> {
        let name_server = response.first_of(RecordType::NS)?;
        let target = name_server.rdata.target()?;
        response.address_of(target)
    }
}

#[async_trait]
impl Resolver for StubResolver {
    async fn resolve(
        &self,
        name: &DomainName,
        record_type: RecordType,
        server: IpAddr,
    ) -> Result<DnsMessage, DomainError> {
        let mut current = server;
        let mut hops = 0;
        loop {
            let response = self.agent.query(record_type, name, current).await?;

            if response.has_answer_of(record_type) {
                debug!(
                    name = %name,
                    record_type = %record_type,
                    server = %current,
                    hops,
                    answers = response.answers.len(),
                    "Resolution complete"
                );
                return Ok(response);
            }

            let Some(next) = Self::referral_target(&response) else {
                debug!(
                    name = %name,
                    record_type = %record_type,
                    server = %current,
                    hops,
                    "Terminal response without usable referral"
                );
                return Ok(response);
            };

            if hops >= self.max_referrals {
                warn!(
                    name = %name,
                    record_type = %record_type,
                    limit = self.max_referrals,
                    "Referral limit exceeded"
                );
                return Err(DomainError::ReferralLimitExceeded {
                    limit: self.max_referrals,
                });
            }
            hops += 1;

            debug!(
                name = %name,
                record_type = %record_type,
                from = %current,
                to = %next,
                hops,
                "Following referral"
            );
            current = next;
        }
    }

    async fn resolve_a(&self, name: &str, server: IpAddr) -> Result<DnsMessage, DomainError> {
        let name = DomainName::parse(name)?;
        if name.as_str() == LOCALHOST {
            debug!("Answering localhost without network interaction");
            let record = ResourceRecord::a(name, IpAddr::V4(Ipv4Addr::LOCALHOST));
            return Ok(DnsMessage::local_shortcut(record));
        }
        self.resolve(&name, RecordType::A, server).await
    }
}
