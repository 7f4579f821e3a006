use crate::name::DomainName;
use crate::query::DnsQuery;
use crate::record::{RecordType, ResourceRecord};
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Query,
    Response,
}

/// One message of a query/response exchange. A response with an empty answer
/// sequence is a meaningful "no data" result, not an error. Messages live for
/// a single exchange; nothing caches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage {
    pub kind: MessageKind,
    pub question: Option<DnsQuery>,
    pub answers: Vec<ResourceRecord>,
    /// Marks the synthetic localhost answer, which never crosses the
    /// simulated wire.
    pub local_shortcut: bool,
}

impl DnsMessage {
    pub fn query(question: DnsQuery) -> Self {
        Self {
            kind: MessageKind::Query,
            question: Some(question),
            answers: Vec::new(),
            local_shortcut: false,
        }
    }

    pub fn response(answers: Vec<ResourceRecord>) -> Self {
        Self {
            kind: MessageKind::Response,
            question: None,
            answers,
            local_shortcut: false,
        }
    }

    pub fn empty() -> Self {
        Self::response(Vec::new())
    }

    pub fn local_shortcut(record: ResourceRecord) -> Self {
        Self {
            kind: MessageKind::Response,
            question: None,
            answers: vec![record],
            local_shortcut: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn has_answer_of(&self, record_type: RecordType) -> bool {
        self.answers
            .iter()
            .any(|record| record.record_type() == record_type)
    }

    pub fn first_of(&self, record_type: RecordType) -> Option<&ResourceRecord> {
        self.answers
            .iter()
            .find(|record| record.record_type() == record_type)
    }

    /// The first A answer held for `name`, if any. This is how a resolver
    /// finds the glue address accompanying a referral.
    pub fn address_of(&self, name: &DomainName) -> Option<IpAddr> {
        self.answers
            .iter()
            .filter(|record| record.record_type() == RecordType::A)
            .find(|record| &record.name == name)
            .and_then(|record| record.rdata.address())
    }
}
