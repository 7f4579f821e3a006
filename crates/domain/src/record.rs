use crate::errors::DomainError;
use crate::name::DomainName;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    MX,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::MX => "MX",
        }
    }

    /// NS and MX answers name another host; a resolver needs that host's
    /// address record alongside them.
    pub fn requires_glue(&self) -> bool {
        matches!(self, RecordType::NS | RecordType::MX)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "MX" => Ok(RecordType::MX),
            _ => Err(DomainError::UnknownRecordType(s.to_string())),
        }
    }
}

/// Typed record payload: an address for A, a hostname for NS/MX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rdata {
    A(IpAddr),
    Ns(DomainName),
    Mx(DomainName),
}

impl Rdata {
    pub fn record_type(&self) -> RecordType {
        match self {
            Rdata::A(_) => RecordType::A,
            Rdata::Ns(_) => RecordType::NS,
            Rdata::Mx(_) => RecordType::MX,
        }
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self {
            Rdata::A(address) => Some(*address),
            _ => None,
        }
    }

    /// The hostname an NS or MX record points at.
    pub fn target(&self) -> Option<&DomainName> {
        match self {
            Rdata::Ns(target) | Rdata::Mx(target) => Some(target),
            Rdata::A(_) => None,
        }
    }
}

impl fmt::Display for Rdata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rdata::A(address) => write!(f, "{}", address),
            Rdata::Ns(target) | Rdata::Mx(target) => write!(f, "{}", target),
        }
    }
}

/// One authoritative fact about a domain name. Immutable once created; zone
/// mutations replace membership, never record contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub rdata: Rdata,
}

impl ResourceRecord {
    pub fn a(name: DomainName, address: IpAddr) -> Self {
        Self {
            name,
            rdata: Rdata::A(address),
        }
    }

    pub fn ns(name: DomainName, target: DomainName) -> Self {
        Self {
            name,
            rdata: Rdata::Ns(target),
        }
    }

    pub fn mx(name: DomainName, target: DomainName) -> Self {
        Self {
            name,
            rdata: Rdata::Mx(target),
        }
    }

    /// Builds a record from string parts, canonicalizing the name and parsing
    /// the data according to the record type.
    pub fn from_parts(
        name: &str,
        record_type: RecordType,
        data: &str,
    ) -> Result<Self, DomainError> {
        let name = DomainName::parse(name)?;
        let rdata = match record_type {
            RecordType::A => {
                let address = data.trim().parse::<IpAddr>().map_err(|_| {
                    DomainError::InvalidRecordData {
                        record_type,
                        data: data.to_string(),
                    }
                })?;
                Rdata::A(address)
            }
            RecordType::NS => Rdata::Ns(DomainName::parse(data)?),
            RecordType::MX => Rdata::Mx(DomainName::parse(data)?),
        };
        Ok(Self { name, rdata })
    }

    pub fn record_type(&self) -> RecordType {
        self.rdata.record_type()
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.record_type(), self.rdata)
    }
}
