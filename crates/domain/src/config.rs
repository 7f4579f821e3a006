use crate::errors::DomainError;
use crate::record::{RecordType, ResourceRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::IpAddr;

/// A full simulated topology: resolver tuning plus one entry per server node.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TopologyConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub address: IpAddr,

    #[serde(default)]
    pub recursion: bool,

    #[serde(default)]
    pub default_name_server: Option<IpAddr>,

    #[serde(default)]
    pub records: Vec<StaticRecord>,
}

/// One zone-population entry as written in a topology file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticRecord {
    pub name: String,
    pub record_type: String,
    pub data: String,
}

impl StaticRecord {
    pub fn parse(&self) -> Result<ResourceRecord, DomainError> {
        let record_type: RecordType = self.record_type.parse()?;
        ResourceRecord::from_parts(&self.name, record_type, &self.data)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_max_referrals")]
    pub max_referrals: usize,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Artificial one-way delay per simulated round trip.
    #[serde(default)]
    pub latency_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_referrals: default_max_referrals(),
            query_timeout_ms: default_query_timeout_ms(),
            latency_ms: 0,
        }
    }
}

fn default_max_referrals() -> usize {
    16
}

fn default_query_timeout_ms() -> u64 {
    5000
}

impl TopologyConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut addresses = HashSet::new();
        for server in &self.servers {
            if !addresses.insert(server.address) {
                return Err(DomainError::ConfigError(format!(
                    "duplicate server address {}",
                    server.address
                )));
            }
            for record in &server.records {
                record.parse()?;
            }
        }
        Ok(())
    }
}
