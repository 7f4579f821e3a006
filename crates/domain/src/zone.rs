use crate::errors::DomainError;
use crate::name::DomainName;
use crate::record::{RecordType, ResourceRecord};
use std::collections::HashMap;
use std::net::IpAddr;

/// The authoritative record set of a single server node. Invariant: every
/// record is stored under its own canonical name.
#[derive(Debug, Clone, Default)]
pub struct Zone {
    records: HashMap<DomainName, Vec<ResourceRecord>>,
}

/// The closest ancestor zone cut found for a queried name: the NS record and,
/// when the zone also knows it, the A record for the nameserver's hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegation {
    pub name_server: ResourceRecord,
    pub glue: Option<ResourceRecord>,
}

impl Delegation {
    pub fn glue_address(&self) -> Option<IpAddr> {
        self.glue.as_ref().and_then(|record| record.rdata.address())
    }

    /// The referral answer sequence: the NS record first, glue after.
    pub fn into_answers(self) -> Vec<ResourceRecord> {
        let mut answers = vec![self.name_server];
        if let Some(glue) = self.glue {
            answers.push(glue);
        }
        answers
    }
}

impl Zone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores one record, canonicalizing the name. Identical
    /// `(name, type, data)` tuples are kept once.
    pub fn add(&mut self, name: &str, record_type: RecordType, data: &str) -> Result<(), DomainError> {
        let record = ResourceRecord::from_parts(name, record_type, data)?;
        self.insert(record);
        Ok(())
    }

    pub fn insert(&mut self, record: ResourceRecord) {
        let entries = self.records.entry(record.name.clone()).or_default();
        if !entries.contains(&record) {
            entries.push(record);
        }
    }

    /// Exact matches only; no wildcards, no case folding beyond what
    /// canonicalization already applied.
    pub fn lookup(&self, name: &DomainName, record_type: RecordType) -> Vec<ResourceRecord> {
        self.records
            .get(name)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|record| record.record_type() == record_type)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The A record held for `name`, if any: the glue lookup primitive.
    pub fn address_of(&self, name: &DomainName) -> Option<ResourceRecord> {
        self.records
            .get(name)?
            .iter()
            .find(|record| record.record_type() == RecordType::A)
            .cloned()
    }

    /// Walks the ancestors of `name` from the immediate parent up to the
    /// root label and returns at the first ancestor holding an NS record.
    /// The longest suffix wins: a more specific zone cut always beats a less
    /// specific one.
    pub fn find_ancestor_delegation(&self, name: &DomainName) -> Option<Delegation> {
        for ancestor in name.ancestors() {
            let name_server = self
                .records
                .get(&ancestor)
                .and_then(|entries| {
                    entries
                        .iter()
                        .find(|record| record.record_type() == RecordType::NS)
                })
                .cloned();
            if let Some(name_server) = name_server {
                let glue = name_server
                    .rdata
                    .target()
                    .and_then(|target| self.address_of(target));
                return Some(Delegation { name_server, glue });
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
