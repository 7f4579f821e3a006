use crate::name::DomainName;
use crate::record::RecordType;

/// What is asked of a server: a name and a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: DomainName,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: DomainName, record_type: RecordType) -> Self {
        Self { name, record_type }
    }
}
