use crate::record::RecordType;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Invalid {record_type} record data: {data}")]
    InvalidRecordData {
        record_type: RecordType,
        data: String,
    },

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: IpAddr },

    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    #[error("Referral limit of {limit} hops exceeded")]
    ReferralLimitExceeded { limit: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
