#![allow(dead_code)]

use async_trait::async_trait;
use netlab_dns_application::ports::{QueryAgent, Resolver};
use netlab_dns_domain::{DnsMessage, DomainError, DomainName, RecordType, ResourceRecord};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;

pub fn name(s: &str) -> DomainName {
    DomainName::parse(s).unwrap()
}

pub fn addr(s: &str) -> IpAddr {
    s.parse().unwrap()
}

pub fn a_record(owner: &str, ip: &str) -> ResourceRecord {
    ResourceRecord::a(name(owner), addr(ip))
}

pub fn ns_record(owner: &str, target: &str) -> ResourceRecord {
    ResourceRecord::ns(name(owner), name(target))
}

pub fn mx_record(owner: &str, target: &str) -> ResourceRecord {
    ResourceRecord::mx(name(owner), name(target))
}

pub type QueryKey = (IpAddr, String, RecordType);

/// Scripted query agent: one canned result per (server, name, type), with
/// the full call sequence recorded. Unscripted queries answer empty.
pub struct MockQueryAgent {
    responses: Mutex<HashMap<QueryKey, Result<DnsMessage, DomainError>>>,
    calls: Mutex<Vec<QueryKey>>,
}

impl MockQueryAgent {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_response(
        &self,
        server: &str,
        name: &str,
        record_type: RecordType,
        message: DnsMessage,
    ) {
        self.responses
            .lock()
            .unwrap()
            .insert((addr(server), name.to_string(), record_type), Ok(message));
    }

    pub fn set_error(&self, server: &str, name: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert((addr(server), name.to_string(), record_type), Err(error));
    }

    pub fn calls(&self) -> Vec<QueryKey> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn servers_queried(&self) -> Vec<IpAddr> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(server, _, _)| *server)
            .collect()
    }
}

impl Default for MockQueryAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryAgent for MockQueryAgent {
    async fn query(
        &self,
        record_type: RecordType,
        name: &DomainName,
        server: IpAddr,
    ) -> Result<DnsMessage, DomainError> {
        let key = (server, name.as_str().to_string(), record_type);
        self.calls.lock().unwrap().push(key.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(DnsMessage::empty()))
    }
}

/// Fake resolver port: returns one configured result and records every
/// invocation so tests can assert on the forwarded target address.
pub struct MockResolver {
    result: Mutex<Result<DnsMessage, DomainError>>,
    calls: Mutex<Vec<(String, RecordType, IpAddr)>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self {
            result: Mutex::new(Ok(DnsMessage::empty())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(message: DnsMessage) -> Self {
        let resolver = Self::new();
        resolver.set_response(message);
        resolver
    }

    pub fn set_response(&self, message: DnsMessage) {
        *self.result.lock().unwrap() = Ok(message);
    }

    pub fn set_error(&self, error: DomainError) {
        *self.result.lock().unwrap() = Err(error);
    }

    pub fn calls(&self) -> Vec<(String, RecordType, IpAddr)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn targets(&self) -> Vec<IpAddr> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, server)| *server)
            .collect()
    }
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolver for MockResolver {
    async fn resolve(
        &self,
        name: &DomainName,
        record_type: RecordType,
        server: IpAddr,
    ) -> Result<DnsMessage, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((name.as_str().to_string(), record_type, server));
        self.result.lock().unwrap().clone()
    }

    async fn resolve_a(&self, name: &str, server: IpAddr) -> Result<DnsMessage, DomainError> {
        let name = DomainName::parse(name).unwrap();
        self.resolve(&name, RecordType::A, server).await
    }
}
