use crate::ports::Resolver;
use netlab_dns_domain::{
    DnsMessage, DnsQuery, DomainError, MessageKind, RecordType, ResourceRecord, StaticRecord, Zone,
};
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Authoritative server for one node's zone. Answers from local data when it
/// can, otherwise hands out a referral to the closest ancestor zone cut or,
/// with recursion enabled, resolves on the caller's behalf.
pub struct DelegatingServer {
    zone: RwLock<Zone>,
    recursion: AtomicBool,
    resolver: Arc<dyn Resolver>,
    default_name_server: Option<IpAddr>,
}

impl DelegatingServer {
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self {
            zone: RwLock::new(Zone::new()),
            recursion: AtomicBool::new(false),
            resolver,
            default_name_server: None,
        }
    }

    pub fn with_recursion(self, enabled: bool) -> Self {
        self.recursion.store(enabled, Ordering::Relaxed);
        self
    }

    /// The address forwarded to when no closer delegation exists. Explicit
    /// configuration; a closer delegation always takes precedence.
    pub fn with_default_name_server(mut self, address: IpAddr) -> Self {
        self.default_name_server = Some(address);
        self
    }

    pub fn recursion_enabled(&self) -> bool {
        self.recursion.load(Ordering::Relaxed)
    }

    pub fn set_recursion_enabled(&self, enabled: bool) {
        self.recursion.store(enabled, Ordering::Relaxed);
    }

    pub fn default_name_server(&self) -> Option<IpAddr> {
        self.default_name_server
    }

    pub async fn add_record(
        &self,
        name: &str,
        record_type: RecordType,
        data: &str,
    ) -> Result<(), DomainError> {
        self.zone.write().await.add(name, record_type, data)
    }

    pub async fn load_records(&self, records: &[StaticRecord]) -> Result<(), DomainError> {
        let mut zone = self.zone.write().await;
        for record in records {
            zone.insert(record.parse()?);
        }
        Ok(())
    }

    pub async fn zone_len(&self) -> usize {
        self.zone.read().await.len()
    }

    /// Wire entry point: unwraps the question from a query message and
    /// answers with a response message.
    pub async fn handle(&self, request: &DnsMessage) -> Result<DnsMessage, DomainError> {
        if request.kind != MessageKind::Query {
            return Err(DomainError::MalformedMessage(
                "expected a query message".to_string(),
            ));
        }
        let question = request.question.as_ref().ok_or_else(|| {
            DomainError::MalformedMessage("query message without a question".to_string())
        })?;
        self.answer(question).await
    }

    pub async fn answer(&self, query: &DnsQuery) -> Result<DnsMessage, DomainError> {
        let delegation = {
            let zone = self.zone.read().await;
            let mut answers = zone.lookup(&query.name, query.record_type);
            if !answers.is_empty() {
                append_glue(&zone, &mut answers);
                debug!(
                    name = %query.name,
                    record_type = %query.record_type,
                    answers = answers.len(),
                    "Answering from local zone"
                );
                return Ok(DnsMessage::response(answers));
            }
            zone.find_ancestor_delegation(&query.name)
        };

        if self.recursion_enabled() {
            let target = delegation
                .as_ref()
                .and_then(|delegation| delegation.glue_address())
                .or(self.default_name_server);
            return match target {
                Some(address) => {
                    debug!(
                        name = %query.name,
                        record_type = %query.record_type,
                        target = %address,
                        "Forwarding query"
                    );
                    self.resolver
                        .resolve(&query.name, query.record_type, address)
                        .await
                }
                None => {
                    debug!(
                        name = %query.name,
                        record_type = %query.record_type,
                        "No forward target configured"
                    );
                    Ok(DnsMessage::empty())
                }
            };
        }

        match delegation {
            Some(delegation) => {
                debug!(
                    name = %query.name,
                    zone_cut = %delegation.name_server.name,
                    "Returning referral"
                );
                Ok(DnsMessage::response(delegation.into_answers()))
            }
            None => {
                debug!(
                    name = %query.name,
                    record_type = %query.record_type,
                    "No data"
                );
                Ok(DnsMessage::empty())
            }
        }
    }
}

/// An NS or MX answer alone is useless to a resolver when the target's
/// address is known locally; append that glue after the matched records.
fn append_glue(zone: &Zone, answers: &mut Vec<ResourceRecord>) {
    let mut glue = Vec::new();
    for record in answers.iter() {
        if let Some(target) = record.rdata.target() {
            if let Some(address) = zone.address_of(target) {
                if !answers.contains(&address) && !glue.contains(&address) {
                    glue.push(address);
                }
            }
        }
    }
    answers.append(&mut glue);
}
